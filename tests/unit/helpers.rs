//! Shared test doubles: scripted port implementations over a common event
//! log, so tests can assert both outcomes and cross-port ordering.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use netshift::application::ports::{
    Clock, LinkProbe, LocalFs, PackageManager, PrivilegeProbe, ProgressReporter, Prompter,
    RefreshStampStore, ServiceManager, SessionProbe, WifiStation,
};
use netshift::domain::{Cancelled, NetInterface};

// ── Event log ─────────────────────────────────────────────────────────────────

/// Shared, ordered record of everything the mocks were asked to do.
/// Mutating events use the prefixes `apt:`, `systemctl:`, `fs:`, `iwctl:`.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Index of the first event containing `needle`.
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e.contains(needle))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.index_of(needle).is_some()
    }

    /// Count of events containing `needle`.
    pub fn count_of(&self, needle: &str) -> usize {
        self.0.borrow().iter().filter(|e| e.contains(needle)).count()
    }

    /// No package, service, filesystem, or wifi mutation was recorded.
    pub fn no_mutations(&self) -> bool {
        const MUTATIONS: [&str; 7] = [
            "apt:update",
            "apt:install",
            "apt:purge",
            "systemctl:enable-now",
            "systemctl:stop",
            "fs:",
            "iwctl:connect",
        ];
        !self
            .0
            .borrow()
            .iter()
            .any(|e| MUTATIONS.iter().any(|m| e.starts_with(m)))
    }
}

// ── Package manager ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FakePackages {
    pub log: EventLog,
    on_path: Rc<RefCell<HashSet<String>>>,
}

impl FakePackages {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            on_path: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Mark an executable as already present on the search path.
    pub fn with_on_path(self, exe: &str) -> Self {
        self.on_path.borrow_mut().insert(exe.to_string());
        self
    }
}

impl PackageManager for FakePackages {
    fn command_on_path(&self, exe: &str) -> bool {
        self.on_path.borrow().contains(exe)
    }

    async fn refresh_index(&self) -> Result<()> {
        self.log.push("apt:update");
        Ok(())
    }

    async fn install(&self, package: &str) -> Result<()> {
        self.log.push(format!("apt:install {package}"));
        Ok(())
    }

    async fn purge(&self, packages: &[&str]) -> Result<()> {
        self.log.push(format!("apt:purge {}", packages.join(" ")));
        Ok(())
    }
}

// ── Service manager ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FakeServices {
    pub log: EventLog,
    installed: Rc<RefCell<HashSet<String>>>,
    active: Rc<RefCell<HashSet<String>>>,
    enabled: Rc<RefCell<HashSet<String>>>,
}

impl FakeServices {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            installed: Rc::default(),
            active: Rc::default(),
            enabled: Rc::default(),
        }
    }

    pub fn with_installed(self, unit: &str) -> Self {
        self.installed.borrow_mut().insert(unit.to_string());
        self
    }

    pub fn with_active_enabled(self, unit: &str) -> Self {
        self.installed.borrow_mut().insert(unit.to_string());
        self.active.borrow_mut().insert(unit.to_string());
        self.enabled.borrow_mut().insert(unit.to_string());
        self
    }

    pub fn with_active_only(self, unit: &str) -> Self {
        self.installed.borrow_mut().insert(unit.to_string());
        self.active.borrow_mut().insert(unit.to_string());
        self
    }
}

impl ServiceManager for FakeServices {
    async fn unit_installed(&self, unit: &str) -> Result<bool> {
        Ok(self.installed.borrow().contains(unit))
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        Ok(self.active.borrow().contains(unit))
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        Ok(self.enabled.borrow().contains(unit))
    }

    async fn enable_now(&self, unit: &str) -> Result<()> {
        self.log.push(format!("systemctl:enable-now {unit}"));
        self.installed.borrow_mut().insert(unit.to_string());
        self.active.borrow_mut().insert(unit.to_string());
        self.enabled.borrow_mut().insert(unit.to_string());
        Ok(())
    }

    async fn stop(&self, unit: &str) -> Result<()> {
        self.log.push(format!("systemctl:stop {unit}"));
        self.active.borrow_mut().remove(unit);
        Ok(())
    }
}

// ── WiFi station ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FakeStation {
    pub log: EventLog,
    devices: Rc<RefCell<Vec<String>>>,
    /// Number of device-list polls that return empty before `devices` shows up.
    visible_after_polls: usize,
    polls: Rc<RefCell<usize>>,
}

impl FakeStation {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            devices: Rc::default(),
            visible_after_polls: 0,
            polls: Rc::default(),
        }
    }

    pub fn with_device(self, name: &str) -> Self {
        self.devices.borrow_mut().push(name.to_string());
        self
    }

    pub fn visible_after(mut self, polls: usize) -> Self {
        self.visible_after_polls = polls;
        self
    }

    pub fn poll_count(&self) -> usize {
        *self.polls.borrow()
    }
}

impl WifiStation for FakeStation {
    async fn device_names(&self) -> Result<Vec<String>> {
        *self.polls.borrow_mut() += 1;
        if *self.polls.borrow() > self.visible_after_polls {
            Ok(self.devices.borrow().clone())
        } else {
            Ok(Vec::new())
        }
    }

    async fn device_listing(&self) -> Result<String> {
        Ok(format!("Devices: {}", self.devices.borrow().join(", ")))
    }

    async fn connect(&self, device: &str, ssid: &str, passphrase: Option<&str>) -> Result<()> {
        self.log.push(format!(
            "iwctl:connect {device} ssid={ssid} passphrase={}",
            passphrase.unwrap_or("<none>")
        ));
        Ok(())
    }
}

// ── Prompter ──────────────────────────────────────────────────────────────────

/// Scripted interaction provider. Every prompt is logged; an unscripted
/// prompt is an error so tests fail loudly when the flow asks something
/// unexpected.
#[derive(Clone)]
pub struct ScriptedPrompter {
    pub log: EventLog,
    confirms: Rc<RefCell<VecDeque<bool>>>,
    inputs: Rc<RefCell<VecDeque<String>>>,
    secrets: Rc<RefCell<VecDeque<String>>>,
    selections: Rc<RefCell<VecDeque<usize>>>,
}

impl ScriptedPrompter {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            confirms: Rc::default(),
            inputs: Rc::default(),
            secrets: Rc::default(),
            selections: Rc::default(),
        }
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn with_input(self, text: &str) -> Self {
        self.inputs.borrow_mut().push_back(text.to_string());
        self
    }

    pub fn with_secret(self, text: &str) -> Self {
        self.secrets.borrow_mut().push_back(text.to_string());
        self
    }

    pub fn with_selection(self, index: usize) -> Self {
        self.selections.borrow_mut().push_back(index);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn notice(&self, title: &str, _body: &str) -> Result<()> {
        self.log.push(format!("prompt:notice {title}"));
        Ok(())
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.log.push(format!("prompt:confirm {prompt}"));
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected confirm prompt: {prompt}"))
    }

    fn input(&self, prompt: &str) -> Result<String> {
        self.log.push(format!("prompt:input {prompt}"));
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected input prompt: {prompt}"))
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        self.log.push(format!("prompt:secret {prompt}"));
        self.secrets
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected secret prompt: {prompt}"))
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        self.log
            .push(format!("prompt:select {prompt} [{}]", items.join(" | ")));
        let index = self
            .selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected select prompt: {prompt}"))?;
        anyhow::ensure!(index < items.len(), "scripted selection out of range");
        Ok(index)
    }
}

/// Cancels at the first prompt of any kind.
pub struct CancellingPrompter;

impl Prompter for CancellingPrompter {
    fn notice(&self, _title: &str, _body: &str) -> Result<()> {
        Ok(())
    }

    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        Err(Cancelled.into())
    }

    fn input(&self, _prompt: &str) -> Result<String> {
        Err(Cancelled.into())
    }

    fn secret(&self, _prompt: &str) -> Result<String> {
        Err(Cancelled.into())
    }

    fn select(&self, _prompt: &str, _items: &[String]) -> Result<usize> {
        Err(Cancelled.into())
    }
}

// ── Clock and stamp ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FixedClock(Rc<RefCell<DateTime<Utc>>>);

impl FixedClock {
    pub fn at_epoch(secs: i64) -> Self {
        Self(Rc::new(RefCell::new(
            DateTime::from_timestamp(secs, 0).expect("valid epoch"),
        )))
    }

    pub fn advance(&self, by: Duration) {
        let mut t = self.0.borrow_mut();
        *t += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.borrow()
    }
}

#[derive(Clone, Default)]
pub struct MemoryStamp(Rc<RefCell<Option<DateTime<Utc>>>>);

impl MemoryStamp {
    pub fn value(&self) -> Option<DateTime<Utc>> {
        *self.0.borrow()
    }
}

impl RefreshStampStore for MemoryStamp {
    fn load(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(*self.0.borrow())
    }

    fn save(&self, at: DateTime<Utc>) -> Result<()> {
        *self.0.borrow_mut() = Some(at);
        Ok(())
    }
}

// ── Probes ────────────────────────────────────────────────────────────────────

pub struct StaticLinks(pub Vec<NetInterface>);

impl StaticLinks {
    pub fn wired_and_wireless(wired: &[&str], wireless: &[&str]) -> Self {
        let mut interfaces = Vec::new();
        for name in wired {
            interfaces.push(NetInterface {
                name: (*name).to_string(),
                arp_type: 1,
                wireless: false,
            });
        }
        for name in wireless {
            interfaces.push(NetInterface {
                name: (*name).to_string(),
                arp_type: 1,
                wireless: true,
            });
        }
        Self(interfaces)
    }
}

impl LinkProbe for StaticLinks {
    fn interfaces(&self) -> Result<Vec<NetInterface>> {
        Ok(self.0.clone())
    }
}

pub struct FakeSession(pub bool);

impl SessionProbe for FakeSession {
    fn remote_unmultiplexed(&self) -> Result<bool> {
        Ok(self.0)
    }
}

pub struct Privilege(pub bool);

impl PrivilegeProbe for Privilege {
    fn is_root(&self) -> Result<bool> {
        Ok(self.0)
    }
}

// ── Filesystem ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemFs {
    pub log: EventLog,
    files: Rc<RefCell<HashMap<PathBuf, String>>>,
    dirs: Rc<RefCell<HashSet<PathBuf>>>,
}

impl MemFs {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            files: Rc::default(),
            dirs: Rc::default(),
        }
    }

    pub fn with_dir(self, path: &Path) -> Self {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl LocalFs for MemFs {
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        self.log.push(format!("fs:write {}", path.display()));
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn remove_dir_all_if_exists(&self, path: &Path) -> Result<bool> {
        if self.dirs.borrow_mut().remove(path) {
            self.log.push(format!("fs:rmdir {}", path.display()));
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
