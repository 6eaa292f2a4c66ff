use crate::common::*;

#[doc = "env helper function"]
fn get_env_or_panic(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "Function to globally initialize the 'ELASTIC_INFO_PATH' variable"]
pub static ELASTIC_INFO_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("ELASTIC_INFO_PATH"));
