use serde_json::json;

/// Returns the JSON schema for menu availability collaborator responses
pub fn get_menu_availability_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "categories": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "categoryId": { "type": "string" },
                        "status": {
                            "type": "string",
                            "enum": ["available", "limited", "unavailable"]
                        },
                        "totalAvailable": { "type": "integer" },
                        "availableDishes": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "id": { "type": "string" },
                                    "name": { "type": "string" },
                                    "requiresModification": { "type": "boolean" },
                                    "modifications": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    }
                                },
                                "required": ["name", "requiresModification"]
                            }
                        },
                        "reason": { "type": "string" },
                        "warning": { "type": "string" }
                    },
                    "required": ["categoryId", "availableDishes"]
                }
            }
        },
        "required": ["categories"]
    })
}
