//! Validate payload use case

use crate::application::schema::Schema;
use crate::error::{ItemTagsError, Result};
use crate::infrastructure::PayloadSource;
use serde_json::Value;
use tracing::{debug, warn};

/// Service for checking a JSON payload against one DTO schema
pub struct ValidatePayloadService {
    schema: Schema,
}

impl ValidatePayloadService {
    pub fn new(schema: Schema) -> Self {
        ValidatePayloadService { schema }
    }

    /// Read the payload from `source` and validate it
    pub fn execute(&self, source: &PayloadSource) -> Result<Value> {
        debug!(schema = %self.schema, source = %source.describe(), "reading payload");
        let text = source.read()?;
        self.validate_text(&text)
    }

    /// Validate JSON text, returning the normalized payload
    pub fn validate_text(&self, text: &str) -> Result<Value> {
        let value: Value = serde_json::from_str(text).inspect_err(|e| {
            warn!(schema = %self.schema, error = %e, "payload is not valid JSON");
        })?;

        match self.schema.normalize(&value) {
            Ok(normalized) => {
                debug!(schema = %self.schema, "payload accepted");
                Ok(normalized)
            }
            Err(ItemTagsError::Validation(errors)) => {
                warn!(
                    schema = %self.schema,
                    errors = errors.len(),
                    fields = ?errors.fields(),
                    "payload rejected"
                );
                Err(ItemTagsError::Validation(errors))
            }
            Err(e) => Err(e),
        }
    }
}
