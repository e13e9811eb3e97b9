//! Authoritative application state for CloudNav.
//!
//! All record mutations flow through [`StateManager`], which owns the link
//! and category lists and notifies registered observers after every change.
//! Persistence and remote sync are observers of state-change events, not
//! inline side effects scattered through handlers.

use chrono::Utc;
use uuid::Uuid;

use crate::codec::import::ParsedImport;
use crate::types::backup::BackupDocument;
use crate::types::errors::StateError;
use crate::types::record::{Category, Link, DEFAULT_CATEGORY_ID};

/// Name and icon of the category seeded on a fresh install.
pub const DEFAULT_CATEGORY_NAME: &str = "General";
pub const DEFAULT_CATEGORY_ICON: &str = "folder";

/// Emitted to observers after each mutation, alongside the new snapshot.
#[derive(Debug, Clone)]
pub enum StateEvent {
    LinkAdded(String),
    LinkUpdated(String),
    LinkRemoved(String),
    CategoryAdded(String),
    CategoryUpdated(String),
    /// A category was removed; `reassigned` links moved to the default category.
    CategoryRemoved { id: String, reassigned: usize },
    /// An import was merged: counts of appended links and categories.
    ImportMerged { links: usize, categories: usize },
    /// The whole record set was replaced (restore from backup).
    Replaced,
}

/// Observer of state changes. Receives the event and a full snapshot of the
/// record set after the mutation has been applied.
pub trait StateObserver {
    fn state_changed(&mut self, event: &StateEvent, snapshot: &BackupDocument);
}

/// Trait defining record-set operations.
pub trait StateManagerTrait {
    fn add_link(
        &mut self,
        title: &str,
        url: &str,
        icon: Option<&str>,
        description: Option<&str>,
        category_id: &str,
    ) -> String;
    fn update_link(
        &mut self,
        id: &str,
        title: Option<&str>,
        url: Option<&str>,
        category_id: Option<&str>,
    ) -> Result<(), StateError>;
    fn set_pinned(&mut self, id: &str, pinned: bool) -> Result<(), StateError>;
    fn remove_link(&mut self, id: &str) -> Result<(), StateError>;
    fn add_category(&mut self, name: &str, icon: &str, password: Option<&str>) -> String;
    fn update_category(
        &mut self,
        id: &str,
        name: Option<&str>,
        icon: Option<&str>,
    ) -> Result<(), StateError>;
    fn set_category_password(&mut self, id: &str, password: Option<&str>) -> Result<(), StateError>;
    fn remove_category(&mut self, id: &str) -> Result<(), StateError>;
    fn merge_import(&mut self, parsed: ParsedImport) -> (usize, usize);
    fn replace_all(&mut self, doc: BackupDocument);
    fn links(&self) -> &[Link];
    fn categories(&self) -> &[Category];
    fn get_link(&self, id: &str) -> Option<&Link>;
    fn get_category(&self, id: &str) -> Option<&Category>;
    fn snapshot(&self) -> BackupDocument;
}

/// In-memory record set with change observers.
pub struct StateManager {
    links: Vec<Link>,
    categories: Vec<Category>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for StateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateManager")
            .field("links", &self.links)
            .field("categories", &self.categories)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            categories: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Loads a cached record set without notifying observers. Used once at
    /// startup; hydration is not a user mutation.
    pub fn hydrate(&mut self, doc: BackupDocument) {
        self.links = doc.links;
        self.categories = doc.categories;
    }

    /// Seeds the default category on a fresh install, so deleted categories
    /// always have a live reassignment target.
    pub fn ensure_default_category(&mut self) {
        if self.categories.iter().any(|c| c.id == DEFAULT_CATEGORY_ID) {
            return;
        }
        self.categories.push(Category {
            id: DEFAULT_CATEGORY_ID.to_string(),
            name: DEFAULT_CATEGORY_NAME.to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            password: None,
        });
        self.notify(StateEvent::CategoryAdded(DEFAULT_CATEGORY_ID.to_string()));
    }

    fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    fn notify(&mut self, event: StateEvent) {
        let snapshot = BackupDocument {
            links: self.links.clone(),
            categories: self.categories.clone(),
        };
        for observer in &mut self.observers {
            observer.state_changed(&event, &snapshot);
        }
    }

    fn find_link_mut(&mut self, id: &str) -> Result<&mut Link, StateError> {
        self.links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StateError::LinkNotFound(id.to_string()))
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManagerTrait for StateManager {
    /// Adds a new link. Returns the generated link ID.
    ///
    /// `category_id` is taken as given; it is a soft reference and is not
    /// validated against the category list.
    fn add_link(
        &mut self,
        title: &str,
        url: &str,
        icon: Option<&str>,
        description: Option<&str>,
        category_id: &str,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.links.push(Link {
            id: id.clone(),
            title: title.to_string(),
            url: url.to_string(),
            icon: icon.map(str::to_string),
            description: description.map(str::to_string),
            category_id: category_id.to_string(),
            created_at: Self::now_ms(),
            pinned: false,
        });
        self.notify(StateEvent::LinkAdded(id.clone()));
        id
    }

    /// Updates the title, URL, and/or category of an existing link.
    fn update_link(
        &mut self,
        id: &str,
        title: Option<&str>,
        url: Option<&str>,
        category_id: Option<&str>,
    ) -> Result<(), StateError> {
        {
            let link = self.find_link_mut(id)?;
            if let Some(t) = title {
                link.title = t.to_string();
            }
            if let Some(u) = url {
                link.url = u.to_string();
            }
            if let Some(c) = category_id {
                link.category_id = c.to_string();
            }
        }
        self.notify(StateEvent::LinkUpdated(id.to_string()));
        Ok(())
    }

    fn set_pinned(&mut self, id: &str, pinned: bool) -> Result<(), StateError> {
        self.find_link_mut(id)?.pinned = pinned;
        self.notify(StateEvent::LinkUpdated(id.to_string()));
        Ok(())
    }

    fn remove_link(&mut self, id: &str) -> Result<(), StateError> {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        if self.links.len() == before {
            return Err(StateError::LinkNotFound(id.to_string()));
        }
        self.notify(StateEvent::LinkRemoved(id.to_string()));
        Ok(())
    }

    /// Adds a new category. Returns the generated category ID.
    fn add_category(&mut self, name: &str, icon: &str, password: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            icon: icon.to_string(),
            password: password.map(str::to_string),
        });
        self.notify(StateEvent::CategoryAdded(id.clone()));
        id
    }

    fn update_category(
        &mut self,
        id: &str,
        name: Option<&str>,
        icon: Option<&str>,
    ) -> Result<(), StateError> {
        {
            let category = self
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| StateError::CategoryNotFound(id.to_string()))?;
            if let Some(n) = name {
                category.name = n.to_string();
            }
            if let Some(i) = icon {
                category.icon = i.to_string();
            }
        }
        self.notify(StateEvent::CategoryUpdated(id.to_string()));
        Ok(())
    }

    /// Sets or clears a category's lock password. The password is stored in
    /// plaintext: it gates visibility, nothing more.
    fn set_category_password(&mut self, id: &str, password: Option<&str>) -> Result<(), StateError> {
        {
            let category = self
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| StateError::CategoryNotFound(id.to_string()))?;
            category.password = password.map(str::to_string);
        }
        self.notify(StateEvent::CategoryUpdated(id.to_string()));
        Ok(())
    }

    /// Removes a category, reassigning its links to the default category.
    ///
    /// Links are never deleted with their category (cascade-reassign,
    /// not cascade-delete). The default category itself cannot be removed.
    fn remove_category(&mut self, id: &str) -> Result<(), StateError> {
        if id == DEFAULT_CATEGORY_ID {
            return Err(StateError::DefaultCategoryImmutable);
        }
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Err(StateError::CategoryNotFound(id.to_string()));
        }

        let mut reassigned = 0;
        for link in self.links.iter_mut().filter(|l| l.category_id == id) {
            link.category_id = DEFAULT_CATEGORY_ID.to_string();
            reassigned += 1;
        }

        self.notify(StateEvent::CategoryRemoved {
            id: id.to_string(),
            reassigned,
        });
        Ok(())
    }

    /// Merges a parsed bookmark import into the current state.
    ///
    /// Categories merge by exact, case-sensitive name: an incoming category
    /// is appended only when no existing category shares its name, otherwise
    /// its links are re-bound to the existing category's id. All parsed
    /// links are appended unconditionally, with no URL de-duplication.
    ///
    /// Returns `(links_added, categories_added)`.
    fn merge_import(&mut self, parsed: ParsedImport) -> (usize, usize) {
        let mut remap: Vec<(String, String)> = Vec::new();
        let mut categories_added = 0;

        for category in parsed.categories {
            match self.categories.iter().find(|c| c.name == category.name) {
                Some(existing) => remap.push((category.id, existing.id.clone())),
                None => {
                    self.categories.push(category);
                    categories_added += 1;
                }
            }
        }

        let links_added = parsed.links.len();
        for mut link in parsed.links {
            if let Some((_, target)) = remap.iter().find(|(from, _)| *from == link.category_id) {
                link.category_id = target.clone();
            }
            self.links.push(link);
        }

        self.notify(StateEvent::ImportMerged {
            links: links_added,
            categories: categories_added,
        });
        (links_added, categories_added)
    }

    /// Replaces the whole record set, e.g. after restoring a cloud backup.
    fn replace_all(&mut self, doc: BackupDocument) {
        self.links = doc.links;
        self.categories = doc.categories;
        self.notify(StateEvent::Replaced);
    }

    fn links(&self) -> &[Link] {
        &self.links
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn get_link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn snapshot(&self) -> BackupDocument {
        BackupDocument {
            links: self.links.clone(),
            categories: self.categories.clone(),
        }
    }
}
