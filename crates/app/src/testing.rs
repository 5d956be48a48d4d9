//! In-memory hub used by unit tests: answers reads from a table and
//! records every round trip in order.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use hubkit_domain::descriptor::{Attribute, Command, DeviceDescriptor};
use hubkit_domain::error::{BridgeError, MalformedResponseError};
use hubkit_domain::hub_value::HubValue;

use crate::ports::HubClient;

/// One recorded round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Read(String),
    Command(String, Option<HubValue>),
}

#[derive(Debug, Clone)]
enum Reply {
    Value(HubValue),
    Malformed,
}

#[derive(Debug, Default)]
pub struct FakeHub {
    replies: Mutex<HashMap<String, Reply>>,
    failing_commands: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, url: impl Into<String>, value: impl Into<HubValue>) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.into(), Reply::Value(value.into()));
    }

    pub fn reply_malformed(&self, url: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.into(), Reply::Malformed);
    }

    pub fn fail_command(&self, url: impl Into<String>) {
        self.failing_commands.lock().unwrap().insert(url.into());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl HubClient for FakeHub {
    async fn current_value(&self, url: &str) -> Result<HubValue, BridgeError> {
        self.calls.lock().unwrap().push(Call::Read(url.to_string()));
        let reply = self.replies.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Value(value)) => Ok(value),
            Some(Reply::Malformed) => Err(MalformedResponseError::MissingCurrentValue.into()),
            None => Err(BridgeError::transport(format!("404 for {url}"))),
        }
    }

    async fn command(&self, url: &str, value: Option<HubValue>) -> Result<(), BridgeError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Command(url.to_string(), value));
        if self.failing_commands.lock().unwrap().contains(url) {
            return Err(BridgeError::transport("connection reset"));
        }
        Ok(())
    }
}

pub fn attribute_url(device: &str, attribute: Attribute) -> String {
    format!("https://hub.test/{device}/attributes/{attribute}")
}

pub fn command_url(device: &str, command: Command) -> String {
    format!("https://hub.test/{device}/commands/{command}")
}

/// Descriptor named `device` whose endpoints follow [`attribute_url`] and
/// [`command_url`].
pub fn descriptor(device: &str, commands: &[Command], attributes: &[Attribute]) -> DeviceDescriptor {
    let mut builder = DeviceDescriptor::builder().name(device);
    for command in commands {
        builder = builder.command(*command, command_url(device, *command));
    }
    for attribute in attributes {
        builder = builder.attribute(*attribute, attribute_url(device, *attribute));
    }
    builder.build().unwrap()
}
