use crate::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::{Map, Number, Value};
use std::path::{Path, PathBuf};

/// Called with the key whose value changed
pub type StateListener = Box<dyn Fn(&str) + Send + Sync>;

/// Typed view of one stored value
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    String(String),
    Number(Decimal),
    Flag(bool),
}

/// Small key/value store persisted as a JSON object.
///
/// Setting a key to `None` removes it. Every change rewrites the file and
/// notifies listeners with the changed key. IO failures are logged and the
/// in-memory state carries on.
pub struct StateStore {
    path: PathBuf,
    data: Map<String, Value>,
    listeners: Vec<StateListener>,
}

impl StateStore {
    /// Open the store at `path`, creating an empty one if needed
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists()
            && let Err(err) = init_file(&path)
        {
            tracing::warn!(path = %path.display(), error = %err, "Failed to initialise state");
        }

        let data = match read_file(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to read state");
                Map::new()
            }
        };

        Self {
            path,
            data,
            listeners: Vec::new(),
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("edjournal").join("state.json"))
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<StateValue> {
        match self.data.get(key)? {
            Value::String(s) => Some(StateValue::String(s.clone())),
            Value::Bool(b) => Some(StateValue::Flag(*b)),
            Value::Number(n) => number_to_decimal(n).map(StateValue::Number),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            StateValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn get_number(&self, key: &str) -> Option<Decimal> {
        match self.get(key)? {
            StateValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn get_flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            StateValue::Flag(b) => Some(b),
            _ => None,
        }
    }

    pub fn set_string(&mut self, key: &str, value: Option<&str>) {
        self.set(key, value.map(|s| Value::String(s.to_string())));
    }

    pub fn set_number(&mut self, key: &str, value: Option<Decimal>) {
        let value = match value.map(decimal_to_number).transpose() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Number cannot be stored");
                return;
            }
        };
        self.set(key, value.map(Value::Number));
    }

    pub fn set_flag(&mut self, key: &str, value: Option<bool>) {
        self.set(key, value.map(Value::Bool));
    }

    pub fn remove(&mut self, key: &str) {
        if self.data.remove(key).is_some() {
            self.changed(key);
        }
    }

    fn set(&mut self, key: &str, value: Option<Value>) {
        let Some(value) = value else {
            self.remove(key);
            return;
        };
        if self.data.get(key) == Some(&value) {
            return;
        }
        self.data.insert(key.to_string(), value);
        self.changed(key);
    }

    fn changed(&self, key: &str) {
        if let Err(err) = self.write() {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to write state");
        }
        for listener in &self.listeners {
            listener(key);
        }
    }

    fn write(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("path", &self.path)
            .field("keys", &self.data.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, "{}")?;
    Ok(())
}

fn read_file(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn decimal_to_number(value: Decimal) -> Result<Number> {
    Ok(value.normalize().to_string().parse::<Number>()?)
}

fn number_to_decimal(number: &Number) -> Option<Decimal> {
    number
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| number.as_f64().and_then(Decimal::from_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_initialised() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("state.json");

        let store = StateStore::open(&path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(store.keys().count(), 0);
    }

    #[test]
    fn test_typed_values_persist() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = StateStore::open(&path);
        store.set_string("system", Some("Sol"));
        store.set_number("fuel", Some(dec!(14.5)));
        store.set_number("credits", Some(dec!(1000)));
        store.set_flag("docked", Some(true));

        let reopened = StateStore::open(&path);
        assert_eq!(reopened.get_string("system").as_deref(), Some("Sol"));
        assert_eq!(reopened.get_number("fuel"), Some(dec!(14.5)));
        assert_eq!(reopened.get_number("credits"), Some(dec!(1000)));
        assert_eq!(reopened.get_flag("docked"), Some(true));
        assert_eq!(reopened.keys().collect::<Vec<_>>(), ["credits", "docked", "fuel", "system"]);
    }

    #[test]
    fn test_mismatched_type_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = StateStore::open(temp_dir.path().join("state.json"));
        store.set_string("system", Some("Sol"));

        assert_eq!(store.get_flag("system"), None);
        assert_eq!(store.get_number("system"), None);
        assert_eq!(store.get("system"), Some(StateValue::String("Sol".to_string())));
    }

    #[test]
    fn test_none_removes_and_notifies() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = StateStore::open(temp_dir.path().join("state.json"));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |key| sink.lock().unwrap().push(key.to_string()));

        store.set_flag("docked", Some(true));
        store.set_flag("docked", Some(true));
        store.set_flag("docked", None);
        store.remove("docked");

        assert_eq!(store.get_flag("docked"), None);
        assert_eq!(*seen.lock().unwrap(), ["docked", "docked"]);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = StateStore::open(temp_dir.path().join("state.json"));

        store.set_string("system", Some("Sol"));
        store.set_string("system", Some("Achenar"));
        assert_eq!(store.get_string("system").as_deref(), Some("Achenar"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = StateStore::open(&path);
        assert_eq!(store.keys().count(), 0);

        store.set_flag("docked", Some(false));
        assert_eq!(StateStore::open(&path).get_flag("docked"), Some(false));
    }
}
