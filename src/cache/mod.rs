use dashmap::DashMap;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::PayloadVariant;

mod keys;

pub use keys::location_key;

/// 与某个位置键绑定的载荷，创建后不再变化
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocationRecord {
    Numbers { numbers: Vec<u32> },
    Message { message: String },
}

/// 进程内位置缓存
///
/// 键为规范化后的位置键，值在首次访问时生成一次，之后原样返回。
/// DashMap 的 entry 接口保证并发首次请求下同一键至多生成一次。
pub struct LocationCache {
    entries: DashMap<String, LocationRecord>,
    variant: PayloadVariant,
}

impl LocationCache {
    pub fn new(variant: PayloadVariant) -> Self {
        Self {
            entries: DashMap::new(),
            variant,
        }
    }

    pub fn variant(&self) -> PayloadVariant {
        self.variant
    }

    /// 取出已有记录，否则生成并插入一条新记录
    ///
    /// `lat`/`lng` 为原始坐标，仅供 message 变体渲染文案使用。
    pub fn get_or_create(&self, key: &str, lat: f64, lng: f64) -> LocationRecord {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!("Generating record for new location key {}", key);
                generate_record(self.variant, lat, lng)
            })
            .clone()
    }

    /// 只读查询，未创建过的键返回 None，不会触发生成
    pub fn lookup(&self, key: &str) -> Option<LocationRecord> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    /// 未命中时对外返回的"空"载荷
    pub fn empty_record(&self, lat: f64, lng: f64) -> LocationRecord {
        match self.variant {
            PayloadVariant::Numbers => LocationRecord::Numbers { numbers: vec![] },
            PayloadVariant::Message => LocationRecord::Message {
                message: format!("No message for location ({lat:.2}, {lng:.2})"),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn generate_record(variant: PayloadVariant, lat: f64, lng: f64) -> LocationRecord {
    let mut rng = rand::rng();
    match variant {
        PayloadVariant::Numbers => LocationRecord::Numbers {
            numbers: (0..3).map(|_| rng.random_range(1..=100)).collect(),
        },
        PayloadVariant::Message => {
            let lucky = rng.random_range(1..=100);
            LocationRecord::Message {
                message: format!("Your lucky number at ({lat:.2}, {lng:.2}) is {lucky}"),
            }
        }
    }
}
