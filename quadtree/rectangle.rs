use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 轴对齐边界框 - 索引中每个条目以及查询范围都用它表示
///
/// 不变量：规范化之后 `min[0] <= max[0]` 且 `min[1] <= max[1]`。
#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[{:?} -> {:?}]", min, max)]
pub struct Rectangle {
    pub min: [f64; 2],  // [x_min, y_min]
    pub max: [f64; 2],  // [x_max, y_max]
}

impl Rectangle {
    /// 创建新的矩形，坐标顺序可以颠倒，构造时自动规范化
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Rectangle {
            min: [x1, y1],
            max: [x2, y2],
        }
        .normalize()
    }

    /// 创建一个点矩形
    pub fn from_point(x: f64, y: f64) -> Self {
        Rectangle {
            min: [x, y],
            max: [x, y],
        }
    }

    /// 由中心点和半宽/半高创建矩形
    pub fn from_center(center: [f64; 2], half_extent: [f64; 2]) -> Self {
        Rectangle::new(
            center[0] - half_extent[0],
            center[1] - half_extent[1],
            center[0] + half_extent[0],
            center[1] + half_extent[1],
        )
    }

    /// 交换颠倒的边界，保证 min <= max（幂等）
    pub fn normalize(self) -> Self {
        let [mut x1, mut y1] = self.min;
        let [mut x2, mut y2] = self.max;
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        Rectangle {
            min: [x1, y1],
            max: [x2, y2],
        }
    }

    /// 判断两个矩形是否相交（闭区间，仅共享边界也算相交）
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.max[0] && self.max[0] >= other.min[0] &&
        self.min[1] <= other.max[1] && self.max[1] >= other.min[1]
    }

    /// 判断当前矩形是否包含一个点
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min[0] <= x && x <= self.max[0] &&
        self.min[1] <= y && y <= self.max[1]
    }

    /// 计算矩形中心点
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// 半宽与半高
    pub fn half_extent(&self) -> [f64; 2] {
        [
            (self.max[0] - self.min[0]) / 2.0,
            (self.max[1] - self.min[1]) / 2.0,
        ]
    }

    /// 所有坐标都是有限值（不含 NaN / 无穷）
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }

    /// 判断矩形是否为点（宽度和高度都为0）
    pub fn is_point(&self) -> bool {
        self.min[0] == self.max[0] && self.min[1] == self.max[1]
    }
}

impl From<geo::Rect<f64>> for Rectangle {
    fn from(rect: geo::Rect<f64>) -> Self {
        Rectangle::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

impl From<geo::Coord<f64>> for Rectangle {
    fn from(coord: geo::Coord<f64>) -> Self {
        Rectangle::from_point(coord.x, coord.y)
    }
}

impl From<[f64; 4]> for Rectangle {
    fn from(bbox: [f64; 4]) -> Self {
        Rectangle::new(bbox[0], bbox[1], bbox[2], bbox[3])
    }
}
