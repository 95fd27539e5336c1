use super::{
    classify_way, road_data_validation, CollectingReporter, DetectionEvent, DetectionReporter,
    DetectionStatistics, LogReporter, SkipReason, ValidationReport, WayOutcome,
};
use crate::config::RoadProcessorConfig;
use crate::model::osm::{
    osm_json_ops::{collection_entries, is_empty_collection, json_type_name},
    OsmDataError, OsmJsonField, OsmNodeCache,
};
use crate::model::road::RoadSegment;
use serde_json::Value;
use std::sync::Arc;

/// turns OSM node/way documents into ordered [`RoadSegment`] lists.
///
/// a detector keeps a node cache and per-pass statistics, so one instance
/// serves one pass at a time. use one detector per thread.
pub struct RoadDetector {
    config: Arc<RoadProcessorConfig>,
    reporter: Arc<dyn DetectionReporter>,
    node_cache: OsmNodeCache,
    statistics: DetectionStatistics,
}

impl RoadDetector {
    pub fn new(config: Arc<RoadProcessorConfig>) -> RoadDetector {
        RoadDetector::with_reporter(config, Arc::new(LogReporter))
    }

    pub fn with_reporter(
        config: Arc<RoadProcessorConfig>,
        reporter: Arc<dyn DetectionReporter>,
    ) -> RoadDetector {
        RoadDetector {
            config,
            reporter,
            node_cache: OsmNodeCache::new(),
            statistics: DetectionStatistics::default(),
        }
    }

    /// a detector with default settings that records its events in the
    /// returned reporter.
    pub fn collecting(config: Arc<RoadProcessorConfig>) -> (RoadDetector, Arc<CollectingReporter>) {
        let reporter = Arc::new(CollectingReporter::new());
        let detector = RoadDetector::with_reporter(config, reporter.clone());
        (detector, reporter)
    }

    pub fn config(&self) -> &RoadProcessorConfig {
        &self.config
    }

    /// statistics of the most recent pass.
    pub fn statistics(&self) -> &DetectionStatistics {
        &self.statistics
    }

    /// classifies every way of `osm_data` and returns the kept segments sorted
    /// by ascending priority. ways of equal priority keep document order.
    ///
    /// never fails. missing or empty `nodes`/`ways` give an empty result, as
    /// does a document that cannot be read at all; bad way records are
    /// dropped individually.
    pub fn detect_road_segments(&mut self, osm_data: &Value) -> Vec<RoadSegment> {
        self.reset();
        match self.read_ways(osm_data) {
            Ok(Some(ways)) => self.classify_all(ways.iter().map(|(id, way)| (id.as_str(), *way))),
            Ok(None) => vec![],
            Err(e) => {
                self.reporter.report(DetectionEvent::DetectionFailed {
                    message: e.to_string(),
                });
                vec![]
            }
        }
    }

    /// like [`RoadDetector::detect_road_segments`] with the ways supplied as
    /// an explicit ordered sequence of `(way id, way record)` pairs.
    pub fn detect_road_segments_ordered<'a, I>(&mut self, nodes: &Value, ways: I) -> Vec<RoadSegment>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        self.reset();
        let mut ways = ways.into_iter().peekable();
        if is_empty_collection(nodes) {
            self.report_empty(OsmJsonField::Nodes);
            return vec![];
        }
        if ways.peek().is_none() {
            self.report_empty(OsmJsonField::Ways);
            return vec![];
        }
        if let Err(e) = self.node_cache.rebuild_from_collection(nodes) {
            self.reporter.report(DetectionEvent::DetectionFailed {
                message: e.to_string(),
            });
            return vec![];
        }
        self.classify_all(ways)
    }

    /// checks a document without detecting anything.
    pub fn validate_road_data(&self, osm_data: &Value) -> ValidationReport {
        road_data_validation::validate_road_data(osm_data)
    }

    fn reset(&mut self) {
        self.statistics = DetectionStatistics::default();
        self.node_cache.clear();
    }

    /// fills the node cache and lists the ways. `None` when there is nothing
    /// to detect.
    fn read_ways<'a>(
        &mut self,
        osm_data: &'a Value,
    ) -> Result<Option<Vec<(String, &'a Value)>>, OsmDataError> {
        if !osm_data.is_object() {
            return Err(OsmDataError::NotAnObject(
                json_type_name(osm_data).to_string(),
            ));
        }
        for field in [OsmJsonField::Nodes, OsmJsonField::Ways] {
            let empty = osm_data
                .get(field.to_str())
                .is_none_or(is_empty_collection);
            if empty {
                self.report_empty(field);
                return Ok(None);
            }
        }
        let cached = self.node_cache.rebuild(osm_data)?;
        let ways = collection_entries(osm_data, OsmJsonField::Ways)?;
        log::debug!("cached {} node coordinates, {} ways to classify", cached, ways.len());
        Ok(Some(ways))
    }

    fn report_empty(&self, field: OsmJsonField) {
        self.reporter.report(DetectionEvent::EmptyInput {
            message: format!("osm data has no {field}"),
        });
    }

    fn classify_all<'a, I>(&mut self, ways: I) -> Vec<RoadSegment>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut segments = vec![];
        for (way_id, way) in ways {
            let classification = classify_way(way_id, way, &self.node_cache, &self.config);
            self.statistics.record(&classification);
            if classification.missing_nodes > 0 {
                self.reporter.report(DetectionEvent::MissingNodes {
                    way_id: way_id.to_string(),
                    missing: classification.missing_nodes,
                });
            }
            match classification.outcome {
                WayOutcome::Segment(segment) => segments.push(segment),
                WayOutcome::Skipped(SkipReason::Malformed { message }) => {
                    self.reporter.report(DetectionEvent::WayFailed {
                        way_id: way_id.to_string(),
                        message,
                    })
                }
                WayOutcome::Skipped(reason) => self.reporter.report(DetectionEvent::WaySkipped {
                    way_id: way_id.to_string(),
                    reason,
                }),
            }
        }
        // stable, so equal priorities keep input order
        segments.sort_by_key(|s| s.priority);
        self.reporter.report(DetectionEvent::Completed {
            statistics: self.statistics.clone(),
        });
        segments
    }
}
