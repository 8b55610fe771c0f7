use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested structure.

    1. Reads the whole file at `file_path` into a string
    2. Parses it with `toml::from_str()` into `T`

    # Type Parameters
    * `T` - any `DeserializeOwned` structure

    # Arguments
    * `file_path` - absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the TOML is malformed or does not match the structure
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Converts a structure into a `serde_json::Value`.

    Used to emit the run report as a single structured log line.

    # Arguments
    * `input_struct` - structure to serialize

    # Returns
    * `Result<Value, anyhow::Error>`
"#]
pub fn convert_json_from_struct<T: Serialize>(input_struct: &T) -> Result<Value, anyhow::Error> {
    serde_json::to_value(input_struct).map_err(|err| {
        anyhow!(
            "[Error][convert_json_from_struct()] Failed to serialize struct to JSON: {}",
            err
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Sample {
        name: String,
        size: u32,
    }

    #[test]
    fn reads_toml_file() {
        let mut file: tempfile::NamedTempFile = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"charts\"\nsize = 3").unwrap();

        let sample: Sample = read_toml_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "charts".to_string(),
                size: 3
            }
        );
    }

    #[test]
    fn missing_toml_file_is_an_error() {
        assert!(read_toml_from_file::<Sample>("./does/not/exist.toml").is_err());
    }

    #[test]
    fn converts_struct_to_json() {
        use serde_json::json;

        let value: Value = convert_json_from_struct(&Sample {
            name: "charts".to_string(),
            size: 3,
        })
        .unwrap();
        assert_eq!(value, json!({ "name": "charts", "size": 3 }));
    }
}
