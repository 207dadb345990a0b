//! Fixed analysis prompt for extracted attachments.

/// JSON template the model is asked to fill in for invoice attachments.
const INVOICE_TEMPLATE: &str = r#"{
  "invoice_number": "",
  "date": "",
  "due_date": "",
  "total_amount": "",
  "vendor": {
    "name": "",
    "address": "",
    "tax_id": ""
  },
  "line_items": [
    {
      "description": "",
      "quantity": "",
      "unit_price": "",
      "amount": ""
    }
  ],
  "taxes": {
    "subtotal": "",
    "tax_rate": "",
    "tax_amount": "",
    "total": ""
  }
}"#;

/// Wraps extracted document text in the fixed invoice-analysis prompt.
///
/// The resulting string replaces the user's message content for the model
/// invocation only; the message the user actually typed is what gets
/// persisted.
pub fn invoice_extraction_prompt(extracted_text: &str) -> String {
    format!(
        "Please analyze this invoice and extract the following information in JSON format:\n\
         {INVOICE_TEMPLATE}\n\n\
         Here is the invoice content:\n\
         {extracted_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_template_and_content() {
        let prompt = invoice_extraction_prompt("ACME Corp\nTotal: 42.00");

        assert!(prompt.starts_with("Please analyze this invoice"));
        assert!(prompt.contains("\"invoice_number\""));
        assert!(prompt.contains("\"line_items\""));
        assert!(prompt.contains("\"tax_rate\""));
        assert!(prompt.ends_with("ACME Corp\nTotal: 42.00"));
    }
}
