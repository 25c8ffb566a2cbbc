//! Type Registry
//!
//! Holds the one canonical instance of every registered managed object type.
//! The registry is built from an explicit registration list and never changes
//! afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::assembly;
use crate::error::{RegistrationError, Result};
use crate::object_type::{ManagedObjectType, TypeKey};
use crate::types;

/// Process-wide registry over the built-in types
static GLOBAL: OnceCell<TypeRegistry> = OnceCell::new();

/// Builds the canonical instance of a type. Only the registry calls this, so
/// no instance exists outside a registry.
pub(crate) trait Construct: ManagedObjectType + Sized {
    fn construct() -> Self;
}

/// One entry of a registration list: a type's key and how to construct its
/// canonical instance.
#[derive(Clone, Copy)]
pub struct Registration {
    key: TypeKey,
    construct: fn() -> Arc<dyn ManagedObjectType>,
}

impl Registration {
    pub(crate) fn of<T: Construct>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            construct: construct::<T>,
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub(crate) fn construct(&self) -> Arc<dyn ManagedObjectType> {
        (self.construct)()
    }
}

fn construct<T: Construct>() -> Arc<dyn ManagedObjectType> {
    Arc::new(T::construct())
}

/// Immutable key → canonical instance table
pub struct TypeRegistry {
    /// Instances in registration order
    entries: Vec<(TypeKey, Arc<dyn ManagedObjectType>)>,
    /// Fast key → entry index lookup
    by_key: HashMap<TypeKey, usize>,
    by_name: HashMap<&'static str, usize>,
    by_path: HashMap<&'static str, usize>,
    /// Reverse parent edges
    children: HashMap<TypeKey, Vec<usize>>,
}

impl TypeRegistry {
    /// Construct every registered type and index it.
    ///
    /// Fails without producing a registry if a key, name or path is
    /// registered twice, a type declares the same parent twice, a declared
    /// parent is not registered, or the parent graph has a cycle.
    pub fn new(registrations: impl IntoIterator<Item = Registration>) -> Result<Self> {
        let mut entries: Vec<(TypeKey, Arc<dyn ManagedObjectType>)> = Vec::new();
        let mut by_key = HashMap::new();
        let mut by_name: HashMap<&'static str, usize> = HashMap::new();
        let mut by_path: HashMap<&'static str, usize> = HashMap::new();

        for registration in registrations {
            let key = registration.key();
            if by_key.contains_key(&key) {
                return Err(RegistrationError::DuplicateKey(key.type_name()).into());
            }

            let ty = registration.construct();
            let idx = entries.len();

            if let Some(&other) = by_name.get(ty.name()) {
                return Err(RegistrationError::DuplicateName {
                    name: ty.name(),
                    first: entries[other].0.type_name(),
                    second: key.type_name(),
                }
                .into());
            }
            if let Some(&other) = by_path.get(ty.path()) {
                return Err(RegistrationError::DuplicatePath {
                    path: ty.path(),
                    first: entries[other].0.type_name(),
                    second: key.type_name(),
                }
                .into());
            }

            debug!("Registered managed object type {} at /{}", ty.name(), ty.path());
            by_key.insert(key, idx);
            by_name.insert(ty.name(), idx);
            by_path.insert(ty.path(), idx);
            entries.push((key, ty));
        }

        let mut children: HashMap<TypeKey, Vec<usize>> = HashMap::new();
        for (idx, (_, ty)) in entries.iter().enumerate() {
            let mut declared = HashSet::new();
            for parent in ty.parents() {
                if !declared.insert(parent) {
                    return Err(RegistrationError::DuplicateParent {
                        child: ty.name(),
                        parent: parent.type_name(),
                    }
                    .into());
                }
                if !by_key.contains_key(&parent) {
                    return Err(RegistrationError::MissingParent {
                        child: ty.name(),
                        parent: parent.type_name(),
                    }
                    .into());
                }
                children.entry(parent).or_default().push(idx);
            }
        }

        let registry = Self {
            entries,
            by_key,
            by_name,
            by_path,
            children,
        };
        registry.check_acyclic()?;

        info!(
            "Type registry initialized: {} types, {} roots",
            registry.len(),
            registry.roots().count()
        );
        Ok(registry)
    }

    /// The process-wide registry over the built-in types, built on first call.
    ///
    /// Concurrent first callers wait for the single initializer; a failed
    /// initialization leaves nothing behind and is reported to every caller
    /// that attempted it.
    pub fn initialize() -> Result<&'static TypeRegistry> {
        GLOBAL.get_or_try_init(|| TypeRegistry::new(types::registrations()))
    }

    /// The process-wide registry if [`TypeRegistry::initialize`] has succeeded
    pub fn global() -> Option<&'static TypeRegistry> {
        GLOBAL.get()
    }

    pub fn lookup(&self, key: TypeKey) -> Option<&Arc<dyn ManagedObjectType>> {
        self.by_key.get(&key).map(|&idx| &self.entries[idx].1)
    }

    pub fn lookup_type<T: ManagedObjectType>(&self) -> Option<&Arc<dyn ManagedObjectType>> {
        self.lookup(TypeKey::of::<T>())
    }

    pub fn lookup_name(&self, name: &str) -> Option<&Arc<dyn ManagedObjectType>> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn lookup_path(&self, path: &str) -> Option<&Arc<dyn ManagedObjectType>> {
        self.by_path.get(path).map(|&idx| &self.entries[idx].1)
    }

    /// Key of a canonical instance held by this registry
    pub fn key_of(&self, ty: &dyn ManagedObjectType) -> Option<TypeKey> {
        let ptr = ty as *const dyn ManagedObjectType as *const ();
        self.entries
            .iter()
            .find(|(_, entry)| Arc::as_ptr(entry) as *const () == ptr)
            .map(|(key, _)| *key)
    }

    /// Canonical instances of the declared parents of `key`
    pub fn parents(&self, key: TypeKey) -> Option<Vec<&Arc<dyn ManagedObjectType>>> {
        let ty = self.lookup(key)?;
        Some(
            ty.parents()
                .into_iter()
                .filter_map(|parent| self.lookup(parent))
                .collect(),
        )
    }

    /// Canonical instances declaring `key` as a parent
    pub fn children(&self, key: TypeKey) -> Option<Vec<&Arc<dyn ManagedObjectType>>> {
        self.lookup(key)?;
        Some(
            self.children
                .get(&key)
                .map(|idxs| idxs.iter().map(|&idx| &self.entries[idx].1).collect())
                .unwrap_or_default(),
        )
    }

    /// Types without parents
    pub fn roots(&self) -> impl Iterator<Item = &Arc<dyn ManagedObjectType>> {
        self.entries
            .iter()
            .filter(|(_, ty)| ty.parents().is_empty())
            .map(|(_, ty)| ty)
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (TypeKey, &Arc<dyn ManagedObjectType>)> {
        self.entries.iter().map(|(key, ty)| (*key, ty))
    }

    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build and bind the template of every registered type.
    ///
    /// Stops at the first failure; templates bound before it stay bound.
    pub fn bind_templates(&self, base_url: &str) -> Result<usize> {
        for (_, ty) in &self.entries {
            assembly::bind_template(ty.as_ref(), base_url)?;
        }
        info!("Bound templates for {} types under {}", self.len(), base_url);
        Ok(self.len())
    }

    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        fn visit(registry: &TypeRegistry, idx: usize, marks: &mut [Mark]) -> Result<()> {
            match marks[idx] {
                Mark::Done => return Ok(()),
                Mark::InProgress => {
                    return Err(RegistrationError::ParentCycle(registry.entries[idx].1.name()).into())
                }
                Mark::Unvisited => {}
            }
            marks[idx] = Mark::InProgress;
            for parent in registry.entries[idx].1.parents() {
                if let Some(&parent_idx) = registry.by_key.get(&parent) {
                    visit(registry, parent_idx, marks)?;
                }
            }
            marks[idx] = Mark::Done;
            Ok(())
        }

        let mut marks = vec![Mark::Unvisited; self.entries.len()];
        for idx in 0..self.entries.len() {
            visit(self, idx, &mut marks)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(_, ty)| ty.name()))
            .finish()
    }
}
