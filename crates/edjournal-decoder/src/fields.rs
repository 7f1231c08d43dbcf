use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::normalize::to_decimal;
use crate::{Error, Result};

/// Read-only view over one journal line's JSON object.
///
/// Unknown keys are ignored. A key holding JSON `null` reads the same as a
/// missing key.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBag {
    map: Map<String, Value>,
}

impl FieldBag {
    pub fn parse(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(Error::NotAnObject),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields { map: &self.map }
    }
}

/// Typed accessors over a JSON object
///
/// `opt_*` accessors return `Ok(None)` for absent fields and fail only on a
/// type mismatch; the plain accessors also fail when the field is absent.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn type_error<T>(key: &str, expected: &'static str) -> Result<T> {
        Err(Error::FieldType {
            field: key.to_string(),
            expected,
        })
    }

    fn require<T>(key: &str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| Error::MissingField(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.map.keys().map(String::as_str)
    }

    pub fn opt_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Self::type_error(key, "a string"),
        }
    }

    pub fn str(&self, key: &str) -> Result<&'a str> {
        Self::require(key, self.opt_str(key)?)
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.opt_str(key)?.map(str::to_string))
    }

    pub fn opt_int(&self, key: &str) -> Result<Option<i64>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Ok(Some(i)),
                None => Self::type_error(key, "an integer"),
            },
            Some(_) => Self::type_error(key, "an integer"),
        }
    }

    pub fn int(&self, key: &str) -> Result<i64> {
        Self::require(key, self.opt_int(key)?)
    }

    pub fn opt_decimal(&self, key: &str) -> Result<Option<Decimal>> {
        match self.value(key) {
            None => Ok(None),
            Some(value) => number_to_decimal(key, value).map(Some),
        }
    }

    pub fn decimal(&self, key: &str) -> Result<Decimal> {
        Self::require(key, self.opt_decimal(key)?)
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Self::type_error(key, "a boolean"),
        }
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        Self::require(key, self.opt_bool(key)?)
    }

    /// Optional boolean that defaults to false when absent
    pub fn flag(&self, key: &str) -> Result<bool> {
        Ok(self.opt_bool(key)?.unwrap_or(false))
    }

    pub fn array(&self, key: &str) -> Result<Option<&'a Vec<Value>>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Self::type_error(key, "an array"),
        }
    }

    pub fn object(&self, key: &str) -> Result<Option<Fields<'a>>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Fields { map })),
            Some(_) => Self::type_error(key, "an object"),
        }
    }

    /// Array of objects; absent reads as empty
    pub fn objects(&self, key: &str) -> Result<Vec<Fields<'a>>> {
        let Some(items) = self.array(key)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Fields { map }),
                _ => Self::type_error(key, "an array of objects"),
            })
            .collect()
    }

    /// Array of strings; absent reads as empty
    pub fn strings(&self, key: &str) -> Result<Vec<String>> {
        let Some(items) = self.array(key)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Self::type_error(key, "an array of strings"),
            })
            .collect()
    }

    /// Array of numbers as fixed point, e.g. `StarPos`
    pub fn decimals(&self, key: &str) -> Result<Vec<Decimal>> {
        let items = Self::require(key, self.array(key)?)?;
        items
            .iter()
            .map(|item| number_to_decimal(key, item))
            .collect()
    }
}

fn number_to_decimal(key: &str, value: &Value) -> Result<Decimal> {
    let Value::Number(n) = value else {
        return Err(Error::FieldType {
            field: key.to_string(),
            expected: "a number",
        });
    };
    if let Some(i) = n.as_i64() {
        return Ok(Decimal::from(i));
    }
    n.as_f64()
        .and_then(to_decimal)
        .ok_or_else(|| Error::Number {
            field: key.to_string(),
            value: n.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bag(raw: &str) -> FieldBag {
        FieldBag::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_requires_object() {
        assert!(matches!(FieldBag::parse("[1,2]"), Err(Error::NotAnObject)));
        assert!(matches!(FieldBag::parse("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_null_reads_as_absent() {
        let bag = bag(r#"{"Faction":null}"#);
        let fields = bag.fields();
        assert_eq!(fields.opt_str("Faction").unwrap(), None);
        assert!(!fields.contains("Faction"));
        assert!(matches!(fields.str("Faction"), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let bag = bag(r#"{"Count":"three","Stolen":1}"#);
        let fields = bag.fields();
        assert!(matches!(fields.int("Count"), Err(Error::FieldType { .. })));
        assert!(matches!(fields.bool("Stolen"), Err(Error::FieldType { .. })));
        assert!(!fields.flag("Abandoned").unwrap());
    }

    #[test]
    fn test_decimal_accessors() {
        let bag = bag(r#"{"Latitude":10.0,"Health":0.456,"Cost":120,"StarPos":[-33.65625,7.5,0]}"#);
        let fields = bag.fields();
        assert_eq!(fields.decimal("Latitude").unwrap(), dec!(10));
        assert_eq!(fields.decimal("Health").unwrap(), dec!(0.456));
        assert_eq!(fields.decimal("Cost").unwrap(), dec!(120));
        assert_eq!(
            fields.decimals("StarPos").unwrap(),
            vec![dec!(-33.65625), dec!(7.5), dec!(0)]
        );
        assert_eq!(fields.opt_decimal("OrbitalPeriod").unwrap(), None);
    }

    #[test]
    fn test_nested_accessors() {
        let bag = bag(
            r#"{"Rewards":[{"Faction":"Empire","Reward":100}],"Systems":["Sol"],"Materials":{"iron":19.2}}"#,
        );
        let fields = bag.fields();

        let rewards = fields.objects("Rewards").unwrap();
        assert_eq!(rewards[0].int("Reward").unwrap(), 100);
        assert_eq!(fields.strings("Systems").unwrap(), vec!["Sol".to_string()]);
        assert!(fields.objects("Rings").unwrap().is_empty());

        let materials = fields.object("Materials").unwrap().unwrap();
        assert_eq!(materials.keys().collect::<Vec<_>>(), vec!["iron"]);
    }
}
