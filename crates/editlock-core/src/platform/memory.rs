//! In-memory reference platform
//! Implements every collaborator trait without a host, for tests and local tooling

use super::traits::{ContentItem, CookieStore, ItemRepository, Workflow, WorkflowProvider};
use crate::constants::{LOCK_FIELD, REVISION_FIELD};
use chrono::{DateTime, Utc};
use editlock_types::{ItemId, TargetDatabase, VersionNumber};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One version of an item held entirely in memory
///
/// Revisions are stamped under `__Revision`. The lock lives under `__Lock`
/// unless renamed with [`MemoryItem::with_lock_field`].
#[derive(Debug, Clone)]
pub struct MemoryItem {
    id: ItemId,
    version: VersionNumber,
    fields: BTreeMap<String, String>,
    template_fields: BTreeSet<String>,
    lock_field: String,
    editor: String,
    standard_values_holder: bool,
    readable: bool,
    lock_fails: bool,
    add_version_fails: bool,
}

impl MemoryItem {
    /// First version of a fresh item, edited by `editor`
    pub fn new(editor: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(REVISION_FIELD.to_string(), new_revision());

        Self {
            id: ItemId::new(),
            version: VersionNumber::new(1),
            fields,
            template_fields: [LOCK_FIELD, REVISION_FIELD]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            lock_field: LOCK_FIELD.to_string(),
            editor: editor.into(),
            standard_values_holder: false,
            readable: true,
            lock_fails: false,
            add_version_fails: false,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn with_version(mut self, number: u32) -> Self {
        self.version = VersionNumber::new(number);
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.template_fields.insert(name.to_string());
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Drop a field from the item's template
    pub fn without_template_field(mut self, name: &str) -> Self {
        self.template_fields.remove(name);
        self.fields.remove(name);
        self
    }

    /// Keep the lock under `name` instead of the platform's default lock field
    pub fn with_lock_field(mut self, name: &str) -> Self {
        self.template_fields.remove(&self.lock_field);
        if let Some(value) = self.fields.remove(&self.lock_field) {
            self.fields.insert(name.to_string(), value);
        }
        self.template_fields.insert(name.to_string());
        self.lock_field = name.to_string();
        self
    }

    pub fn locked_by(mut self, owner: &str) -> Self {
        self.fields.insert(self.lock_field.clone(), lock_value(owner));
        self
    }

    pub fn as_standard_values(mut self) -> Self {
        self.standard_values_holder = true;
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.readable = false;
        self
    }

    /// Every lock acquisition on this item fails
    pub fn failing_lock(mut self) -> Self {
        self.lock_fails = true;
        self
    }

    /// The platform refuses to add versions to this item
    pub fn failing_add_version(mut self) -> Self {
        self.add_version_fails = true;
        self
    }

    fn touch(&mut self) {
        self.fields.insert(REVISION_FIELD.to_string(), new_revision());
    }
}

fn new_revision() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn lock_value(owner: &str) -> String {
    format!(
        "<r owner=\"{}\" date=\"{}\" />",
        owner,
        Utc::now().format("%Y%m%dT%H%M%SZ")
    )
}

impl ContentItem for MemoryItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn version(&self) -> VersionNumber {
        self.version
    }

    fn can_read(&self) -> bool {
        self.readable
    }

    fn is_locked(&self) -> bool {
        self.fields
            .get(&self.lock_field)
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    }

    fn lock(&mut self) -> bool {
        if self.lock_fails || !self.template_fields.contains(&self.lock_field) {
            return false;
        }
        let value = lock_value(&self.editor);
        self.fields.insert(self.lock_field.clone(), value);
        self.touch();
        true
    }

    fn unlock(&mut self) -> bool {
        if self.fields.remove(&self.lock_field).is_none() {
            return false;
        }
        self.touch();
        true
    }

    fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn is_field_part_of_template(&self, name: &str) -> bool {
        self.template_fields.contains(name)
    }

    fn is_standard_values_holder(&self) -> bool {
        self.standard_values_holder
    }

    fn add_version(&self) -> Option<Self> {
        if self.add_version_fails {
            return None;
        }
        let mut added = self.clone();
        added.version = self.version.next();
        added.fields.remove(&self.lock_field);
        added.touch();
        Some(added)
    }
}

/// Workflow whose approval verdict is fixed at construction
#[derive(Debug)]
pub struct MemoryWorkflow {
    id: String,
    approved: bool,
    approval_checks: AtomicUsize,
}

impl MemoryWorkflow {
    pub fn approving(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            approved: true,
            approval_checks: AtomicUsize::new(0),
        })
    }

    pub fn rejecting(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            approved: false,
            approval_checks: AtomicUsize::new(0),
        })
    }

    /// How many times the engine was asked for a verdict
    pub fn approval_checks(&self) -> usize {
        self.approval_checks.load(Ordering::SeqCst)
    }
}

impl Workflow<MemoryItem> for MemoryWorkflow {
    fn workflow_id(&self) -> &str {
        &self.id
    }

    fn is_approved(&self, _item: &MemoryItem, _target: Option<&TargetDatabase>) -> bool {
        self.approval_checks.fetch_add(1, Ordering::SeqCst);
        self.approved
    }
}

/// Repository with an optional workflow provider and per-item workflow assignments
#[derive(Debug, Default)]
pub struct MemoryRepository {
    provider_disabled: bool,
    assignments: HashMap<ItemId, Arc<MemoryWorkflow>>,
    default_workflows: HashSet<ItemId>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository without any workflow provider
    pub fn without_provider() -> Self {
        Self {
            provider_disabled: true,
            ..Self::default()
        }
    }

    /// Assign a workflow to every version of the item
    pub fn assign(mut self, item: ItemId, workflow: Arc<MemoryWorkflow>) -> Self {
        self.assignments.insert(item, workflow);
        self
    }

    /// Mark the item's template as naming a default workflow
    pub fn with_default_workflow(mut self, item: ItemId) -> Self {
        self.default_workflows.insert(item);
        self
    }
}

impl ItemRepository<MemoryItem> for MemoryRepository {
    fn workflow_provider(&self, _item: &MemoryItem) -> Option<&dyn WorkflowProvider<MemoryItem>> {
        if self.provider_disabled {
            None
        } else {
            Some(self)
        }
    }

    fn has_default_workflow(&self, item: &MemoryItem) -> bool {
        self.default_workflows.contains(&item.id())
    }
}

impl WorkflowProvider<MemoryItem> for MemoryRepository {
    fn workflow(&self, item: &MemoryItem) -> Option<Arc<dyn Workflow<MemoryItem>>> {
        self.assignments
            .get(&item.id())
            .map(|workflow| Arc::clone(workflow) as Arc<dyn Workflow<MemoryItem>>)
    }
}

/// A cookie write as the response would carry it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieEntry {
    pub key: String,
    pub value: String,
    pub expires: DateTime<Utc>,
}

/// Records cookie writes in order
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    writes: Vec<CookieEntry>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[CookieEntry] {
        &self.writes
    }

    /// Latest write for a key
    pub fn get(&self, key: &str) -> Option<&CookieEntry> {
        self.writes.iter().rev().find(|entry| entry.key == key)
    }
}

impl CookieStore for MemoryCookieJar {
    fn set_cookie_value(&mut self, key: &str, value: &str, expires: DateTime<Utc>) {
        self.writes.push(CookieEntry {
            key: key.to_string(),
            value: value.to_string(),
            expires,
        });
    }
}
