use crate::utils::error::Result;

pub trait Storage {
    /// Creates or truncates `path` and writes `data` in full.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn domain(&self) -> &str;
    fn canister_id(&self) -> &str;
    fn output_path(&self) -> &str;
}
