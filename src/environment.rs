use std::collections::HashMap;

/// A key/value table the loader can write into and the reporter reads from.
pub trait Environment {
    fn get(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str);
}

/// The real process environment. Child processes inherit what is set here.
///
/// Mutating it is not synchronized; callers must not load concurrently with
/// other threads reading or writing environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    // A non-Unicode value still counts as present.
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An explicit in-memory table, for callers that pass configuration down
/// the call chain instead of touching process-global state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.vars
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }
}
