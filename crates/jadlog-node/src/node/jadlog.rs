//! The Jadlog tracking node: parameter in, one item per tracking event out.

use serde_json::json;
use tracing::Instrument;

use jadlog_tracking::{track, TrackingEvent, TrackingFetcher, TrackingSource};

use crate::types::{
    return_json_array, InvocationContext, NodeDefaults, NodeDescription, NodeExecutionData,
    NodeOutput, NodeProperty, NodeResult,
};

pub const NODE_NAME: &str = "jadlog";
pub const TRACK_NUMBER_PARAM: &str = "trackNumber";

/// Workflow node that looks up a Jadlog shipment.
pub struct JadlogNode<S = TrackingFetcher> {
    source: S,
}

impl<S: TrackingSource> JadlogNode<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn description() -> NodeDescription {
        NodeDescription {
            display_name: "Jadlog".to_string(),
            name: NODE_NAME.to_string(),
            icon: Some("file:Jadlog.svg".to_string()),
            group: vec!["transform".to_string()],
            version: 1,
            subtitle: Some(format!("={{{{$parameter[\"{TRACK_NUMBER_PARAM}\"]}}}}")),
            description: "Fetches tracking information for a Jadlog shipment".to_string(),
            defaults: NodeDefaults {
                name: "Jadlog".to_string(),
            },
            inputs: vec!["main".to_string()],
            outputs: vec!["main".to_string()],
            properties: vec![NodeProperty {
                display_name: "Tracking number".to_string(),
                name: TRACK_NUMBER_PARAM.to_string(),
                property_type: "string".to_string(),
                default: json!(""),
                placeholder: Some("00000000000000".to_string()),
                description: Some("Shipment number to look up".to_string()),
            }],
        }
    }

    /// Run the lookup without swallowing failures.
    pub async fn try_execute(&self, ctx: &InvocationContext) -> NodeResult<Vec<TrackingEvent>> {
        let track_number = ctx.get_parameter(TRACK_NUMBER_PARAM, "")?;
        tracing::info!(%track_number, "Looking up shipment");
        Ok(track(&self.source, &track_number).await?)
    }

    /// Run the lookup the way the host sees it.
    ///
    /// Any failure (bad parameter, network, status, markup) is logged and
    /// turned into an empty `main` branch. The host never gets an error.
    pub async fn execute(&self, ctx: &InvocationContext) -> NodeOutput {
        let execution_id = ctx
            .execution_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let span = tracing::info_span!("jadlog", %execution_id);

        let items = async {
            match self.try_execute(ctx).await.and_then(|events| to_items(&events)) {
                Ok(items) => {
                    tracing::info!("Found {} tracking events", items.len());
                    items
                }
                Err(e) => {
                    tracing::error!("Tracking lookup failed, returning no items: {e}");
                    Vec::new()
                }
            }
        }
        .instrument(span)
        .await;

        vec![items]
    }
}

fn to_items(events: &[TrackingEvent]) -> NodeResult<Vec<NodeExecutionData>> {
    return_json_array(events)
}

impl Default for JadlogNode<TrackingFetcher> {
    fn default() -> Self {
        Self::new(TrackingFetcher::default())
    }
}
