use crate::common::*;

#[doc = r#"
    Reads an environment variable and falls back to `default` when it is not set.

    The batch job is normally started without any surrounding supervisor, so a
    missing variable should not abort the run. The fallback is logged so the
    operator can see which path was actually used.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when the variable is absent

    # Returns
    * `String` - resolved value
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            info!(
                "[get_env_or_default] '{}' is not set. Using default value '{}'",
                key, default
            );
            default.to_string()
        }
    }
}

#[doc = r#"
    Path of the TOML configuration file (`SERVER_CONFIG_PATH`).

    The file contains the input table location, the chart output directory and
    the system section (render parallelism). It is read exactly once in `main`
    and the resulting values are handed to the loader and controller
    constructors; nothing inside the pipeline reads this static.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> = once_lazy::new(|| {
    get_env_or_default("SERVER_CONFIG_PATH", "./config/server_config.toml")
});
