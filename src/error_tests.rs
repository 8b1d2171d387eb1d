//! Unit tests for reconcile error messages.

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use crate::error::ReconcileError;
    use crate::validation::ValidationError;

    #[test]
    fn test_malformed_identifier_message() {
        let error = ReconcileError::MalformedIdentifier {
            id: "www.example.com.".to_string(),
            segments: 1,
        };

        assert_eq!(
            error.to_string(),
            "malformed record identifier 'www.example.com.': expected 2 or 3 segments, found 1"
        );
    }

    #[test]
    fn test_remote_write_carries_context_and_source() {
        let error = ReconcileError::remote_write(
            "delete",
            "sysa.xyz",
            "redis.sysa.xyz.",
            "A",
            anyhow::anyhow!("PowerDNS patch_rrsets failed with 500"),
        );

        assert_eq!(
            error.to_string(),
            "failed to delete record set redis.sysa.xyz. A in zone sysa.xyz: PowerDNS patch_rrsets failed with 500"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_record_not_found_message() {
        let error = ReconcileError::RecordNotFound {
            id: "redis.sysa.xyz.:::A".to_string(),
            zone: "sysa.xyz".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "record 'redis.sysa.xyz.:::A' does not exist in zone sysa.xyz"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let error: ReconcileError = ValidationError::EmptyName.into();
        assert_eq!(error.to_string(), "invalid record set: record name is empty");
    }
}
