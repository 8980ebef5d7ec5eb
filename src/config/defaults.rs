pub(crate) fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

pub(crate) fn default_audio_base_url() -> String {
    "http://localhost:5000/audio".to_string()
}

pub(crate) fn default_voices() -> Vec<String> {
    vec![
        "Mandarin Female (Xiaoyi)".to_string(),
        "Mandarin Female (Xiaoxiao)".to_string(),
        "Mandarin Male (Yunjian)".to_string(),
        "Mandarin Male (Yunxi)".to_string(),
        "English Female (Jenny)".to_string(),
        "English Male (Guy)".to_string(),
    ]
}

pub(crate) fn default_voice() -> String {
    "Mandarin Female (Xiaoyi)".to_string()
}

pub(crate) fn default_speed_percent() -> i32 {
    0
}

pub(crate) fn default_repeat_count() -> u32 {
    1
}

pub(crate) fn default_loop_interval_ms() -> u64 {
    500
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    120
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
