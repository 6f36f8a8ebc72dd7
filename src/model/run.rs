//! Run control: simulated period, replications and random streams.

use crate::model::{FromNode, attr, children, id_attr, value};
use crate::node::Node;
use crate::schema::{NodeType, RANDOM_STREAM, REPLICATION, RUN};
use crate::values::{Duration, Expr};
use crate::xml::DocumentError;

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub start_time: Expr<Duration>,
    pub warmup_period: Expr<Duration>,
    pub run_length: Expr<Duration>,
    pub number_replications: Expr<i64>,
    pub random_streams: Vec<RandomStream>,
}

impl FromNode for Run {
    fn node_type() -> &'static NodeType {
        &RUN
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let random_streams = match node.child("RandomStreams") {
            Some(streams) => children(streams, "RandomStream")?,
            None => Vec::new(),
        };
        Ok(Self {
            start_time: value(node, "StartTime")?,
            warmup_period: value(node, "WarmupPeriod")?,
            run_length: value(node, "RunLength")?,
            number_replications: value(node, "NumberReplications")?,
            random_streams,
        })
    }
}

/// A named random stream with per-replication seeds.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomStream {
    pub id: String,
    pub replications: Vec<Replication>,
}

impl RandomStream {
    /// Seed for a replication, if it is given literally.
    pub fn seed(&self, replication: i64) -> Option<i64> {
        self.replications
            .iter()
            .find(|r| r.id.literal() == Some(&replication))
            .and_then(|r| r.seed.literal().copied())
    }
}

impl FromNode for RandomStream {
    fn node_type() -> &'static NodeType {
        &RANDOM_STREAM
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            replications: children(node, "Replication")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Replication {
    pub id: Expr<i64>,
    pub seed: Expr<i64>,
}

impl FromNode for Replication {
    fn node_type() -> &'static NodeType {
        &REPLICATION
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: attr(node, "Id")?,
            seed: attr(node, "Seed")?,
        })
    }
}
