// src/config/consts.rs

// Net config
pub const API_BASE_URL: &str = "https://api.escavador.com/api/v2";
pub const SEARCH_PATH: &str = "/envolvido/processos";
pub const SEARCH_PARAM: &str = "cpf_cnpj";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("escavador_export/", env!("CARGO_PKG_VERSION"));

// Credentials / env
pub const TOKEN_ENV: &str = "ESCAVADOR_TOKEN";
pub const LOG_ENV: &str = "ESCAVADOR_LOG";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "processos";

// Error bodies are cut to this many chars before surfacing
pub const ERROR_BODY_MAX: usize = 300;
