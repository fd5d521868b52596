use crate::r#type::TypeKey;
use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard},
};
use tracing::debug;

/// NameScope makes message names unique within one generation run.
///
/// Names are keyed by type identity: the same [`TypeKey`] always gets the same
/// name, and two identities proposing the same name get distinct ones. The
/// scope may be shared by concurrent generation tasks.
#[derive(Debug, Default)]
pub struct NameScope {
    names: Mutex<Names>,
}

#[derive(Debug, Default)]
struct Names {
    /// identity => unique name
    by_key: HashMap<TypeKey, String>,

    /// every name handed out so far
    taken: HashSet<String>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unique name for the given identity, registering the
    /// proposed name (followed by qualifier) on first use.
    pub fn hashed_unique(&self, key: &TypeKey, name: &str, qualifier: &str) -> String {
        let mut names = self.lock();
        if let Some(unique) = names.by_key.get(key) {
            return unique.clone();
        }

        let proposed = format!("{}{}", name, qualifier);
        let mut unique = proposed.clone();
        let mut i = 1;
        while names.taken.contains(&unique) {
            i += 1;
            unique = format!("{}{}", proposed, i);
        }

        if unique != proposed {
            debug!(%key, %proposed, %unique, "message name already taken");
        }

        names.taken.insert(unique.clone());
        names.by_key.insert(key.clone(), unique.clone());
        unique
    }

    /// Returns the name registered for the identity, if any
    pub fn lookup(&self, key: &TypeKey) -> Option<String> {
        self.lock().by_key.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Names> {
        // the registry stays consistent even if a holder panicked
        self.names.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
