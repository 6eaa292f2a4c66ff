use crate::common::*;

#[doc = "Function that reads a toml file and converts it into an object."]
/// # Arguments
/// * `file_path` - Path of the toml file to read
///
/// # Returns
/// * Result<T, anyhow::Error> - The deserialized object when the file was read successfully.
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Function that reads a json file and converts it into an object."]
/// # Arguments
/// * `file_path` - Path of the json file to read
///
/// # Returns
/// * Result<T, anyhow::Error> - The deserialized object when the file was read successfully.
pub fn read_json_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let file: File = File::open(file_path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let json: T = from_reader(reader)?;

    Ok(json)
}
