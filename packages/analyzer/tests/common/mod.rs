//! Shared fixtures for integration tests.

#![allow(dead_code)]

/// Contract with two separate payment passages and no confidentiality language.
pub const TWO_PAYMENT_CONTRACT: &str = "SERVICE AGREEMENT between TechCorp Inc. and GlobalEnterprises LLC. \
The Client shall pay an initial deposit of $50,000 upon signing. \
Either party may terminate this Agreement with 15 days written notice. \
Late payments shall incur a penalty of 1.5% per month. \
Disputes shall be resolved through binding arbitration in San Francisco, California.";

pub fn words(n: usize) -> String {
    vec!["clause"; n].join(" ")
}

pub fn combined_response() -> String {
    serde_json::json!({
        "summary": "Service agreement with a deposit, late fees, termination on notice and arbitration.",
        "clauses": [
            {"type": "Payment Terms", "clause": "The Client shall pay an initial deposit of $50,000 upon signing."},
            {"type": "Payment Terms", "clause": "Late payments shall incur a penalty of 1.5% per month."},
            {"type": "Termination", "clause": "Either party may terminate this Agreement with 15 days written notice."},
            {"type": "Dispute Resolution", "clause": "Disputes shall be resolved through binding arbitration in San Francisco, California."}
        ],
        "risky_clauses": [
            {"clause": "15 days written notice", "reason": "No cure period is defined before termination takes effect."}
        ]
    })
    .to_string()
}

pub fn summary_response() -> &'static str {
    "```json\n{\"summary\": \"Service agreement between TechCorp and GlobalEnterprises.\"}\n```"
}

pub fn clauses_response() -> &'static str {
    r#"Here are the clauses I found:
{"clauses": [
  {"type": "PaymentTerms", "clause": "The Client shall pay an initial deposit of $50,000 upon signing."},
  {"type": "PaymentTerms", "clause": "Late payments shall incur a penalty of 1.5% per month."},
  {"type": "Confidentiality", "clause": "Not found"}
]}
Let me know if you need anything else."#
}

pub fn risks_response() -> &'static str {
    r#"{"risky_clauses": [{"clause": "binding arbitration", "reason": "No arbitration rules or cost allocation are specified."}]}"#
}

/// Combined response cut off mid-string, as when the output token limit is hit.
pub fn truncated_combined_response() -> &'static str {
    r#"{"summary": "Service agreement with deposit.", "clauses": [{"type": "PaymentTerms", "clause": "Deposit of $50,000."}, {"type": "Termination", "clause": "Either party may terminate with 15 days"#
}

/// Outer object that does not parse around a well-formed clause object.
pub fn malformed_combined_response() -> &'static str {
    r#"Analysis: {"summary": "Deposit due on signing.", "clauses": [{"type": "PaymentTerms", "clause": "Deposit of $50,000."}] "risky_clauses": []}"#
}
