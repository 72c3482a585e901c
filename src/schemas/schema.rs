use schemars::{schema_for, JsonSchema};
use serde_json::Value;
use std::{any::type_name, sync::Arc};

/// JSON schema generated for a payload type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn for_type<T: JsonSchema>(schema_name: &'static str) -> Self {
        let root = schema_for!(T);
        let schema_json = serde_json::to_value(root).unwrap_or_else(|err| {
            panic!("failed to serialize schema for {}: {}", type_name::<T>(), err)
        });

        Self {
            schema_name,
            type_name: type_name::<T>(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    pub fn schema_json_arc(&self) -> Arc<Value> {
        Arc::clone(&self.schema_json)
    }
}
