//! Translation of message keys used in flashes and templates.

const MESSAGES: &[(&str, &str)] = &[
    ("message.created_successfully", "Record created successfully."),
    ("message.updated_successfully", "Record updated successfully."),
    ("message.deleted_successfully", "Record deleted successfully."),
    ("message.empty_list", "No records found."),
];

/// Look up `key`, falling back to the key itself.
pub fn translate(key: &str) -> String {
    MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| key.to_string())
}
