//! Bundled sample contracts for trying the analyzer.

/// A named sample contract.
pub struct SampleContract {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[SampleContract] = &[
    SampleContract {
        name: "example",
        description: "Short services agreement covering all four clause types",
        text: "This agreement is between Company A and Company B. The payment for services \
rendered shall be made in two equal installments, with the first payment due \
on January 1, 2026, and the second due upon completion of the project. \
Confidential information shared between the parties shall be kept confidential \
for a period of 5 years from the termination of this agreement. Either party \
may terminate this agreement with 30 days' notice. Dispute resolution will \
occur via binding arbitration in New York.",
    },
    SampleContract {
        name: "risky",
        description: "Consulting agreement full of vague and one-sided terms, no dispute clause",
        text: "CONSULTING AGREEMENT

This Agreement is made between ABC Consulting (\"Consultant\") and XYZ Corp (\"Company\").

SCOPE OF WORK
The Consultant shall provide consulting services as reasonably requested by the \
Company. The specific tasks will be determined at the discretion of the Company's \
management team. The Consultant shall use best efforts to complete all assignments \
in a timely manner.

COMPENSATION
The Company shall pay the Consultant a reasonable fee for services rendered, to \
be determined based on the complexity of work performed. Payment shall be made \
within a reasonable time after invoice submission.

CONFIDENTIALITY
The Consultant agrees to keep all Company information confidential for an \
indefinite period. What constitutes confidential information shall be determined \
by the Company as deemed appropriate.

TERMINATION
Either party may terminate this Agreement at any time, with or without cause, \
effective immediately upon verbal or written notice.",
    },
    SampleContract {
        name: "minimal",
        description: "Four-sentence agreement with payment terms only",
        text: "Agreement between Party A and Party B.
Party A will provide services to Party B.
Party B will pay $10,000 for the services.
This agreement is valid for one year from the date of signing.",
    },
];

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static SampleContract> {
    SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::InputValidator;

    #[test]
    fn test_samples_are_valid_contracts() {
        let validator = InputValidator::new(5000);
        for sample in SAMPLES {
            assert!(validator.validate(sample.text).is_ok(), "{}", sample.name);
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("Risky").map(|s| s.name), Some("risky"));
        assert!(find("nonexistent").is_none());
    }
}
