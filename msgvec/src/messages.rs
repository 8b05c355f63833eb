use msgvec_core::{upcast, Message, MessageSequence, MessageVec};

/// The base capability of the demo messages.
pub(crate) trait Valued: Message {
    fn value(&self) -> i64;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Reading {
    pub(crate) value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Alert {
    pub(crate) value: i64,
}

impl Valued for Reading {
    fn value(&self) -> i64 {
        self.value
    }

    fn describe(&self) -> String {
        format!("reading({})", self.value)
    }
}

impl Valued for Alert {
    fn value(&self) -> i64 {
        self.value
    }

    fn describe(&self) -> String {
        format!("alert({})", self.value)
    }
}

upcast!(Valued => Reading, Alert);

pub(crate) type Readings = MessageVec<dyn Valued, Reading>;
pub(crate) type Alerts = MessageVec<dyn Valued, Alert>;

pub(crate) fn readings(values: &[i64]) -> Readings {
    values.iter().map(|value| Reading { value: *value }).collect()
}

pub(crate) fn alerts(values: &[i64]) -> Alerts {
    values.iter().map(|value| Alert { value: *value }).collect()
}

pub(crate) fn render(sequence: &dyn MessageSequence<dyn Valued>) -> String {
    sequence
        .iter()
        .map(|message| message.describe())
        .collect::<Vec<_>>()
        .join(", ")
}
