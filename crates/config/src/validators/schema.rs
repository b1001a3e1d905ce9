//! Declarative record schema

use std::borrow::Cow;

use cronoszkevm_validator::foundation::{Validate, ValidationError, ValidationErrors};

type Rule = Box<dyn Validate<Input = str> + Send + Sync>;

/// One field of a flat settings record.
pub struct FieldSchema {
    key: Cow<'static, str>,
    required_message: Cow<'static, str>,
    rules: Vec<Rule>,
}

impl FieldSchema {
    /// A required field named `key`
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            required_message: Cow::Borrowed("This field is required"),
            rules: Vec::new(),
        }
    }

    /// Message reported when the field is absent
    #[must_use = "builder methods must be chained or built"]
    pub fn required_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required_message = message.into();
        self
    }

    /// Add a rule applied to the value when present
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// The field key, used as the error path
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check one value. Every failing rule is reported, each carrying this
    /// field's key.
    pub fn check(&self, value: Option<&str>) -> Vec<ValidationError> {
        let Some(value) = value else {
            return vec![
                ValidationError::new("required", self.required_message.clone())
                    .with_field(self.key.clone()),
            ];
        };

        self.rules
            .iter()
            .filter_map(|rule| rule.validate(value).err())
            .map(|error| error.with_field(self.key.clone()))
            .collect()
    }
}

impl std::fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSchema")
            .field("key", &self.key)
            .field("required_message", &self.required_message)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// An ordered list of [`FieldSchema`]s applied to a flat record.
///
/// Validation never stops at the first failing field: every field is
/// checked and all failures come back together, in declaration order.
///
/// ```rust
/// use cronoszkevm_config::{FieldSchema, RecordSchema};
/// use cronoszkevm_validator::prelude::*;
///
/// let schema = RecordSchema::new()
///     .field(FieldSchema::new("HOST").rule(min_length(1).with_message("Host is required")))
///     .field(FieldSchema::new("TOKEN").required_message("Token is required"));
///
/// let errors = schema.validate(|key| (key == "HOST").then_some("")).unwrap_err();
/// assert_eq!(errors.to_string(), "HOST: Host is required\nTOKEN: Token is required");
/// ```
#[derive(Debug, Default)]
pub struct RecordSchema {
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Declared keys, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldSchema::key)
    }

    /// Validate the record exposed by `lookup`.
    pub fn validate<'v, F>(&self, lookup: F) -> Result<(), ValidationErrors>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        self.fields
            .iter()
            .flat_map(|field| field.check(lookup(field.key())))
            .collect::<ValidationErrors>()
            .into_result(())
    }
}
