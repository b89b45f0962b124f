//! Monitors module models.
//!
//! This module contains the monitor resource, its enumerated attributes and
//! the response envelopes returned by the monitor endpoints.

use crate::errors::UptimeRobotError;
use crate::helpers::FormParams;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;


/// Integer code that does not map onto any variant of a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i64,
}


impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} code {}", self.kind, self.code)
    }
}


impl std::error::Error for UnknownCode {}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
/// Kind of check performed by a monitor. Only settable on creation.
pub enum MonitorType {
    #[default]
    #[display("HTTP(s)")]
    Http,
    #[display("keyword")]
    Keyword,
    #[display("ping")]
    Ping,
    #[display("port")]
    Port,
}


impl MonitorType {
    pub fn code(self) -> u8 {
        match self {
            MonitorType::Http => 1,
            MonitorType::Keyword => 2,
            MonitorType::Ping => 3,
            MonitorType::Port => 4,
        }
    }
}


impl TryFrom<i64> for MonitorType {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MonitorType::Http),
            2 => Ok(MonitorType::Keyword),
            3 => Ok(MonitorType::Ping),
            4 => Ok(MonitorType::Port),
            _ => Err(UnknownCode { kind: "monitor type", code }),
        }
    }
}


impl From<MonitorType> for u8 {
    fn from(value: MonitorType) -> u8 {
        value.code()
    }
}


/// Accepts the names the dashboard and older tooling use for each kind.
impl FromStr for MonitorType {
    type Err = UptimeRobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP" | "HTTPS" | "HTTP(s)" | "http" | "https" => Ok(MonitorType::Http),
            "keyword" => Ok(MonitorType::Keyword),
            "ping" => Ok(MonitorType::Ping),
            "port" => Ok(MonitorType::Port),
            other => Err(UptimeRobotError::InvalidArgument(format!(
                "unknown monitor type name {other:?}"
            ))),
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
/// Protocol checked by a port monitor.
pub enum MonitorSubType {
    #[display("HTTP")]
    Http,
    #[display("HTTPS")]
    Https,
    #[display("FTP")]
    Ftp,
    #[display("SMTP")]
    Smtp,
    #[display("POP3")]
    Pop3,
    #[display("IMAP")]
    Imap,
    #[display("custom port")]
    Custom,
}


impl MonitorSubType {
    pub fn code(self) -> u8 {
        match self {
            MonitorSubType::Http => 1,
            MonitorSubType::Https => 2,
            MonitorSubType::Ftp => 3,
            MonitorSubType::Smtp => 4,
            MonitorSubType::Pop3 => 5,
            MonitorSubType::Imap => 6,
            MonitorSubType::Custom => 99,
        }
    }
}


impl TryFrom<i64> for MonitorSubType {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MonitorSubType::Http),
            2 => Ok(MonitorSubType::Https),
            3 => Ok(MonitorSubType::Ftp),
            4 => Ok(MonitorSubType::Smtp),
            5 => Ok(MonitorSubType::Pop3),
            6 => Ok(MonitorSubType::Imap),
            99 => Ok(MonitorSubType::Custom),
            _ => Err(UnknownCode { kind: "monitor sub type", code }),
        }
    }
}


impl From<MonitorSubType> for u8 {
    fn from(value: MonitorSubType) -> u8 {
        value.code()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
/// Current state of a monitor. Sending `Paused` or `NotChecked` on edit
/// pauses or resumes it.
///
/// Sent as 0-4. The live service reports seems-down and down as 8 and 9, so
/// both forms are accepted when decoding.
pub enum MonitorStatus {
    #[display("paused")]
    Paused,
    #[display("not checked yet")]
    NotChecked,
    #[display("up")]
    Up,
    #[display("seems down")]
    SeemsDown,
    #[display("down")]
    Down,
}


impl MonitorStatus {
    pub fn code(self) -> u8 {
        match self {
            MonitorStatus::Paused => 0,
            MonitorStatus::NotChecked => 1,
            MonitorStatus::Up => 2,
            MonitorStatus::SeemsDown => 3,
            MonitorStatus::Down => 4,
        }
    }
}


impl TryFrom<i64> for MonitorStatus {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MonitorStatus::Paused),
            1 => Ok(MonitorStatus::NotChecked),
            2 => Ok(MonitorStatus::Up),
            3 | 8 => Ok(MonitorStatus::SeemsDown),
            4 | 9 => Ok(MonitorStatus::Down),
            _ => Err(UnknownCode { kind: "monitor status", code }),
        }
    }
}


impl From<MonitorStatus> for u8 {
    fn from(value: MonitorStatus) -> u8 {
        value.code()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
/// Whether a keyword monitor alerts when the keyword exists or when it is missing.
pub enum KeywordType {
    #[display("exists")]
    Exists,
    #[display("not exists")]
    NotExists,
}


impl KeywordType {
    pub fn code(self) -> u8 {
        match self {
            KeywordType::Exists => 1,
            KeywordType::NotExists => 2,
        }
    }
}


impl TryFrom<i64> for KeywordType {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(KeywordType::Exists),
            2 => Ok(KeywordType::NotExists),
            _ => Err(UnknownCode { kind: "keyword type", code }),
        }
    }
}


impl From<KeywordType> for u8 {
    fn from(value: KeywordType) -> u8 {
        value.code()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
/// Event kinds found in a monitor's log.
pub enum LogType {
    #[display("down")]
    Down,
    #[display("up")]
    Up,
    #[display("started")]
    Started,
    #[display("paused")]
    Paused,
}


impl TryFrom<i64> for LogType {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(LogType::Down),
            2 => Ok(LogType::Up),
            98 => Ok(LogType::Started),
            99 => Ok(LogType::Paused),
            _ => Err(UnknownCode { kind: "log type", code }),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("log type {} at {} for {}s", log_type, datetime, duration)]
/// One entry of a monitor's event history. Only ever received.
pub struct Log {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub log_type: i64,
    #[serde(deserialize_with = "lenient")]
    pub datetime: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: i64,
}


impl Log {
    /// Typed event kind, `None` for codes this crate does not know.
    pub fn kind(&self) -> Option<LogType> {
        LogType::try_from(self.log_type).ok()
    }

    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.datetime, 0)
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("monitor {} {:?} {} [{}]", id, friendly_name, url, monitor_type)]
/// Monitor data model.
///
/// `id` is `0` until the service assigns one. Every `Option` field is left out
/// of create/edit requests when `None`.
pub struct Monitor {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    pub friendly_name: String,
    pub url: String,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub monitor_type: MonitorType,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<MonitorSubType>,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub keyword_type: Option<KeywordType>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub keyword_value: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub http_username: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,
    #[serde(
        default,
        alias = "http_port",
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u16>,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// `None` when unset, and also when the service reports a status code this
    /// crate does not know, so one odd record cannot fail a whole listing.
    #[serde(default, deserialize_with = "known_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorStatus>,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub create_datetime: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub monitor_group: Option<u64>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub is_group_main: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<Log>,
}


impl Monitor {
    /// Monitor with only the required attributes set.
    pub fn new(
        friendly_name: impl Into<String>,
        url: impl Into<String>,
        monitor_type: MonitorType,
    ) -> Self {
        Monitor {
            friendly_name: friendly_name.into(),
            url: url.into(),
            monitor_type,
            ..Default::default()
        }
    }


    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.create_datetime
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }


    /// Checks run before a create request is sent.
    pub(crate) fn validate_for_create(&self) -> Result<(), UptimeRobotError> {
        if self.id != 0 {
            return Err(UptimeRobotError::InvalidArgument(format!(
                "monitor already has id {}, create assigns a new one",
                self.id
            )));
        }
        if self.friendly_name.trim().is_empty() {
            return Err(UptimeRobotError::InvalidArgument(
                "friendly_name is required to create a monitor".to_string(),
            ));
        }
        if self.url.trim().is_empty() {
            return Err(UptimeRobotError::InvalidArgument(
                "url is required to create a monitor".to_string(),
            ));
        }
        Ok(())
    }


    /// Fields shared by create and edit. `type` is not one of them.
    pub(crate) fn write_common_fields(&self, form: &mut FormParams) {
        form.set("friendly_name", &self.friendly_name);
        form.set("url", &self.url);
        form.set_opt("sub_type", self.sub_type.map(MonitorSubType::code));
        form.set_opt("keyword_type", self.keyword_type.map(KeywordType::code));
        form.set_opt("keyword_value", self.keyword_value.as_deref());
        form.set_opt("http_username", self.http_username.as_deref());
        form.set_opt("http_password", self.http_password.as_deref());
        form.set_opt("port", self.port);
        form.set_opt("interval", self.interval);
        form.set_opt("status", self.status.map(MonitorStatus::code));
    }
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("offset {} limit {} total {}", offset, limit, total)]
/// Result window of a list query as reported by the service.
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient")]
    pub offset: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub total: u64,
}


#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parameters for the list endpoint.
///
/// `monitors` restricts the result to those ids, in the order given.
pub struct MonitorsQuery {
    pub monitors: Vec<u64>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub logs: bool,
}


impl MonitorsQuery {
    pub fn ids(ids: &[u64]) -> Self {
        MonitorsQuery {
            monitors: ids.to_vec(),
            ..Default::default()
        }
    }


    pub(crate) fn write_fields(&self, form: &mut FormParams) {
        if !self.monitors.is_empty() {
            let joined = self
                .monitors
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join("-");
            form.set("monitors", joined);
        }
        form.set_opt("offset", self.offset);
        form.set_opt("limit", self.limit);
        if self.logs {
            form.set("logs", 1);
        }
    }
}


#[derive(Debug, Clone, Deserialize)]
/// Response model for the list endpoint.
pub struct MonitorsPage {
    #[serde(default)]
    pub pagination: Pagination,
    pub monitors: Vec<Monitor>,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("changed monitor {} (status {:?})", id, status)]
/// Monitor record returned by create, edit and delete.
pub struct ChangedMonitor {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "known_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorStatus>,
}


#[derive(Debug, Deserialize)]
/// Response model for create, edit and delete.
pub(crate) struct ChangeMonitorResponse {
    #[serde(default)]
    pub monitor: Option<ChangedMonitor>,
}


// The service is loose about JSON types: numbers may arrive as strings and
// absent values as "" or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Bool(bool),
    Str(String),
}


fn raw_to_int<E: serde::de::Error>(raw: RawScalar) -> Result<Option<i64>, E> {
    match raw {
        RawScalar::Int(n) => Ok(Some(n)),
        RawScalar::Bool(b) => Ok(Some(i64::from(b))),
        RawScalar::Str(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|e| E::custom(format!("expected integer, got {s:?}: {e}")))
        }
    }
}


fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    match raw_to_int::<D::Error>(RawScalar::deserialize(deserializer)?)? {
        Some(n) => T::try_from(n).map_err(D::Error::custom),
        None => Err(D::Error::custom("expected integer, got empty string")),
    }
}


fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    let raw = match Option::<RawScalar>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    match raw_to_int::<D::Error>(raw)? {
        Some(n) => T::try_from(n).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}


fn known_status<'de, D>(deserializer: D) -> Result<Option<MonitorStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<RawScalar>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    match raw_to_int::<D::Error>(raw)? {
        Some(n) => match MonitorStatus::try_from(n) {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                warn!(code = n, "Ignoring {e}");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}


fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<RawScalar>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    Ok(raw_to_int::<D::Error>(raw)?.map(|n| n != 0))
}


fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
