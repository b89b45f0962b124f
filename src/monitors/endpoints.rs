//! Monitors module endpoints.
//!
//! This module implements the list, create, edit and delete calls for
//! monitors. Every call is one form-encoded POST.
//!
//! # Usage
//!
//! All endpoint methods are available on [`UptimeRobotClient`](crate::client::UptimeRobotClient).

use crate::client::UptimeRobotClient;
use crate::errors::UptimeRobotError;
use crate::helpers::{FormParams, check_envelope, parse_envelope};
use crate::monitors::models::{
    ChangeMonitorResponse, ChangedMonitor, Monitor, MonitorsPage, MonitorsQuery,
};
use tracing::debug;

const GET_MONITORS: &str = "/getMonitors";
const NEW_MONITOR: &str = "/newMonitor";
const EDIT_MONITOR: &str = "/editMonitor";
const DELETE_MONITOR: &str = "/deleteMonitor";

impl UptimeRobotClient {
    /// Retrieves monitors, optionally restricted to the given ids.
    ///
    /// **Endpoint:** `POST /getMonitors`
    ///
    /// An empty slice asks for every monitor (subject to the server's default
    /// page size). Ids are sent hyphen-joined in the order given; duplicates
    /// are not removed.
    ///
    /// # Returns
    /// The monitors in the order the server returned them.
    pub async fn list_monitors(&self, ids: &[u64]) -> Result<Vec<Monitor>, UptimeRobotError> {
        let page = self.list_monitors_page(&MonitorsQuery::ids(ids)).await?;
        Ok(page.monitors)
    }


    /// Retrieves one page of monitors together with the server's pagination.
    ///
    /// **Endpoint:** `POST /getMonitors`
    ///
    /// # Query Parameters
    /// - `monitors` - Ids to restrict to, hyphen-joined
    /// - `offset` - Start of the window
    /// - `limit` - Window size
    /// - `logs` - Include each monitor's recent event log
    ///
    /// No further pages are fetched; use the returned [`Pagination`](crate::monitors::models::Pagination)
    /// to drive follow-up calls.
    pub async fn list_monitors_page(
        &self,
        params: &MonitorsQuery,
    ) -> Result<MonitorsPage, UptimeRobotError> {
        let mut form = FormParams::new();
        params.write_fields(&mut form);
        let resp = self.post_form(GET_MONITORS, form).await?;
        let data: MonitorsPage = parse_envelope(&resp)?;
        debug!(count = data.monitors.len(), total = data.pagination.total, "Listed monitors");
        Ok(data)
    }


    /// Creates a monitor and stores the server-assigned id in `monitor.id`.
    ///
    /// **Endpoint:** `POST /newMonitor`
    ///
    /// `friendly_name` and `url` must be non-empty and `id` must still be `0`;
    /// otherwise nothing is sent. The monitor type is only ever sent here.
    /// Apart from `id`, no fields are copied back from the response.
    pub async fn create_monitor(
        &self,
        monitor: &mut Monitor,
    ) -> Result<ChangedMonitor, UptimeRobotError> {
        monitor.validate_for_create()?;
        let mut form = FormParams::new();
        // Only allowed to set this on create
        form.set("type", monitor.monitor_type.code());
        monitor.write_common_fields(&mut form);
        let resp = self.post_form(NEW_MONITOR, form).await?;
        let data: ChangeMonitorResponse = parse_envelope(&resp)?;
        let created = data
            .monitor
            .ok_or_else(|| UptimeRobotError::decode("missing field `monitor`", &resp))?;
        debug!(id = created.id, "Created monitor");
        monitor.id = created.id;
        Ok(created)
    }


    /// Updates an existing monitor.
    ///
    /// **Endpoint:** `POST /editMonitor`
    ///
    /// Sends `id` plus the common fields. The monitor type cannot be changed
    /// after creation and is not sent. Only `stat` decides success; the
    /// returned monitor record is not inspected.
    pub async fn edit_monitor(&self, monitor: &Monitor) -> Result<(), UptimeRobotError> {
        if monitor.id == 0 {
            return Err(UptimeRobotError::InvalidArgument(
                "id is required to edit a monitor".to_string(),
            ));
        }
        let mut form = FormParams::new();
        form.set("id", monitor.id);
        monitor.write_common_fields(&mut form);
        let resp = self.post_form(EDIT_MONITOR, form).await?;
        check_envelope(&resp)?;
        debug!(id = monitor.id, "Edited monitor");
        Ok(())
    }


    /// Deletes a monitor by id.
    ///
    /// **Endpoint:** `POST /deleteMonitor`
    pub async fn delete_monitor(&self, id: u64) -> Result<(), UptimeRobotError> {
        if id == 0 {
            return Err(UptimeRobotError::InvalidArgument(
                "id is required to delete a monitor".to_string(),
            ));
        }
        let mut form = FormParams::new();
        form.set("id", id);
        let resp = self.post_form(DELETE_MONITOR, form).await?;
        check_envelope(&resp)?;
        debug!(id, "Deleted monitor");
        Ok(())
    }
}
