//! Preferences cached in-memory.
//!
//! Preferences are backed by a storage provider which may be
//! a JSON document on disc or an in-memory map for tests.
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Boxed storage provider.
pub type PreferenceStorageProvider =
    Box<dyn PreferencesStorage + Send + Sync + 'static>;

/// Storage provider for preferences.
#[async_trait]
pub trait PreferencesStorage {
    /// Load preferences from storage.
    async fn load_preferences(&self) -> Result<PreferenceMap>;

    /// Insert preference into storage.
    async fn insert_preference(
        &self,
        preferences: &PreferenceMap,
        key: &str,
        pref: &Preference,
    ) -> Result<()>;

    /// Remove preference from storage.
    async fn remove_preference(
        &self,
        preferences: &PreferenceMap,
        key: &str,
    ) -> Result<()>;

    /// Remove all preferences from storage.
    async fn clear_preferences(&self, preferences: &PreferenceMap)
        -> Result<()>;
}

/// Preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Preference {
    /// Boolean value.
    Bool(bool),
    /// Number value.
    Number(f64),
    /// String value.
    String(String),
    /// List of strings.
    StringList(Vec<String>),
}

impl Preference {
    /// Boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(val) => Some(*val),
            _ => None,
        }
    }

    /// Number value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(val) => Some(*val),
            _ => None,
        }
    }

    /// String value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(val) => Some(val),
            _ => None,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(val) => write!(f, "{}", val),
            Self::Number(val) => write!(f, "{}", val),
            Self::String(val) => write!(f, "{}", val),
            Self::StringList(val) => {
                write!(f, "[")?;
                for (index, s) in val.iter().enumerate() {
                    write!(f, r#""{}""#, s)?;
                    if index < val.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Preference {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Preference {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Preference {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Preference {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for Preference {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for Preference {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

/// Collection of preferences.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceMap(BTreeMap<String, Preference>);

impl PreferenceMap {
    /// Get a preference.
    pub fn get(&self, key: &str) -> Option<&Preference> {
        self.0.get(key)
    }

    /// Insert a preference.
    pub fn insert(&mut self, key: String, value: Preference) {
        self.0.insert(key, value);
    }

    /// Remove a preference.
    pub fn remove(&mut self, key: &str) -> Option<Preference> {
        self.0.remove(key)
    }
}

/// Preferences collection with a backing storage provider.
pub struct Preferences {
    values: PreferenceMap,
    provider: PreferenceStorageProvider,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("values", &self.values)
            .finish()
    }
}

impl Preferences {
    /// Create new preferences using the given storage provider.
    pub fn new(provider: PreferenceStorageProvider) -> Self {
        Self {
            values: Default::default(),
            provider,
        }
    }

    /// Load the preferences from storage.
    pub async fn load(&mut self) -> Result<()> {
        self.values = self.provider.load_preferences().await?;
        Ok(())
    }

    /// Number of preferences.
    pub fn len(&self) -> usize {
        self.values.0.len()
    }

    /// Whether the preferences collection is empty.
    pub fn is_empty(&self) -> bool {
        self.values.0.is_empty()
    }

    /// Iterator of the preferences.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Preference)> {
        self.values.0.iter()
    }

    /// Get a number preference.
    pub fn get_number(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Option<&Preference>> {
        let result = self.values.0.get(key.as_ref());
        if let Some(res) = result.as_ref() {
            if matches!(res, Preference::Number(_)) {
                Ok(result)
            } else {
                Err(Error::PreferenceTypeNumber(key.as_ref().to_owned()))
            }
        } else {
            Ok(None)
        }
    }

    /// Get a boolean preference.
    pub fn get_bool(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Option<&Preference>> {
        let result = self.values.0.get(key.as_ref());
        if let Some(res) = result.as_ref() {
            if matches!(res, Preference::Bool(_)) {
                Ok(result)
            } else {
                Err(Error::PreferenceTypeBool(key.as_ref().to_owned()))
            }
        } else {
            Ok(None)
        }
    }

    /// Get a string preference.
    pub fn get_string(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Option<&Preference>> {
        let result = self.values.0.get(key.as_ref());
        if let Some(res) = result.as_ref() {
            if matches!(res, Preference::String(_)) {
                Ok(result)
            } else {
                Err(Error::PreferenceTypeString(key.as_ref().to_owned()))
            }
        } else {
            Ok(None)
        }
    }

    /// Get a string list preference.
    pub fn get_string_list(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Option<&Preference>> {
        let result = self.values.0.get(key.as_ref());
        if let Some(res) = result.as_ref() {
            if matches!(res, Preference::StringList(_)) {
                Ok(result)
            } else {
                Err(Error::PreferenceTypeStringList(key.as_ref().to_owned()))
            }
        } else {
            Ok(None)
        }
    }

    /// Get a preference without checking the type.
    pub fn get_unchecked(&self, key: impl AsRef<str>) -> Option<&Preference> {
        self.values.0.get(key.as_ref())
    }

    /// Insert a preference.
    ///
    /// If the preference already exists it is overwritten.
    pub async fn insert(&mut self, key: String, value: Preference) -> Result<()> {
        self.values.0.insert(key.clone(), value.clone());
        self.provider
            .insert_preference(&self.values, &key, &value)
            .await?;
        Ok(())
    }

    /// Remove a preference.
    pub async fn remove(
        &mut self,
        key: impl AsRef<str>,
    ) -> Result<Option<Preference>> {
        let pref = self.values.0.remove(key.as_ref());
        self.provider
            .remove_preference(&self.values, key.as_ref())
            .await?;
        Ok(pref)
    }

    /// Clear all preferences.
    pub async fn clear(&mut self) -> Result<()> {
        self.values = Default::default();
        self.provider.clear_preferences(&self.values).await?;
        Ok(())
    }
}
