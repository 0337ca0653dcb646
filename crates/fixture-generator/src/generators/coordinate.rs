//! 坐标生成

use rand::Rng;

use crate::models::Coordinate;

/// 坐标保留的小数位数
pub const COORDINATE_PRECISION: i32 = 6;

/// 经纬度采样范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// 印度尼西亚的近似地理范围
    pub const INDONESIA: Self = Self {
        min_lat: -10.0,
        max_lat: 6.0,
        min_lng: 95.0,
        max_lng: 141.0,
    };

    /// 在范围内均匀采样一个坐标，并四舍五入到 6 位小数
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let lat = rng.random_range(self.min_lat..=self.max_lat);
        let lng = rng.random_range(self.min_lng..=self.max_lng);

        Coordinate {
            lat: round_to(lat, COORDINATE_PRECISION),
            lng: round_to(lng, COORDINATE_PRECISION),
        }
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

/// 生成项目坐标
///
/// 每个项目目前只有一个点，返回列表是为了兼容线状设施的多点坐标
pub fn generate_coordinates<R: Rng + ?Sized>(rng: &mut R) -> Vec<Coordinate> {
    vec![GeoBounds::INDONESIA.sample(rng)]
}

/// 四舍五入到指定小数位
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
