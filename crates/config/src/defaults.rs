pub fn default_log_level() -> String {
    "warn".to_string()
}

pub fn default_log_format() -> String {
    "pretty".to_string()
}

pub fn default_delimiter() -> String {
    ",".to_string()
}

pub fn default_timestamp_order() -> String {
    "permissive".to_string()
}

pub fn default_metrics_enabled() -> bool {
    false
}
