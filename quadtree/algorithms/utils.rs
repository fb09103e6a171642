use super::super::node::{NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST};
use super::super::rectangle::Rectangle;

/// 矩形相对于节点中心的落点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// 同时跨越两条中心线，必须留在当前节点
    Here,
    /// 落入的子象限（按子象限下标）
    Children([bool; 4]),
}

/// 四向比较：矩形可能触及哪些子象限
///
/// 等于中心坐标的边界同时属于低侧（西/南）和高侧（东/北）。
/// 查询剪枝和插入落点使用同一组比较。
pub(crate) fn quadrant_mask(rect: &Rectangle, center: [f64; 2]) -> [bool; 4] {
    let west = rect.min[0] <= center[0];
    let east = rect.max[0] >= center[0];
    let south = rect.min[1] <= center[1];
    let north = rect.max[1] >= center[1];

    let mut mask = [false; 4];
    mask[SOUTH_WEST] = west && south;
    mask[NORTH_WEST] = west && north;
    mask[SOUTH_EAST] = east && south;
    mask[NORTH_EAST] = east && north;
    mask
}

/// 计算插入/删除时矩形应放置的位置
pub(crate) fn placement(rect: &Rectangle, center: [f64; 2]) -> Placement {
    let mask = quadrant_mask(rect, center);
    // 全部为真即跨越两条中心线；全部为假只会出现在 NaN 坐标上，同样留在本层
    if mask.iter().all(|hit| *hit) || !mask.iter().any(|hit| *hit) {
        Placement::Here
    } else {
        Placement::Children(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: [f64; 2] = [5.0, 5.0];

    #[test]
    fn test_box_straddling_both_axes_stays_here() {
        let rect = Rectangle::new(4.0, 4.0, 6.0, 6.0);
        assert_eq!(placement(&rect, CENTER), Placement::Here);

        // 恰好位于中心的点同样跨越两条中心线
        assert_eq!(placement(&Rectangle::from_point(5.0, 5.0), CENTER), Placement::Here);
    }

    #[test]
    fn test_box_inside_single_quadrant() {
        let rect = Rectangle::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(
            placement(&rect, CENTER),
            Placement::Children([true, false, false, false])
        );

        let rect = Rectangle::new(7.0, 7.0, 9.0, 9.0);
        assert_eq!(
            placement(&rect, CENTER),
            Placement::Children([false, false, false, true])
        );
    }

    #[test]
    fn test_box_straddling_vertical_line_goes_to_both_sides() {
        // 跨越 x = 5，但整体位于 y = 5 以南
        let rect = Rectangle::new(4.0, 1.0, 6.0, 2.0);
        assert_eq!(
            placement(&rect, CENTER),
            Placement::Children([true, false, true, false])
        );
    }

    #[test]
    fn test_box_touching_center_line_counts_on_both_sides() {
        // 右边界恰好落在 x = 5 上
        let rect = Rectangle::new(1.0, 6.0, 5.0, 8.0);
        assert_eq!(
            placement(&rect, CENTER),
            Placement::Children([false, true, false, true])
        );
    }

    #[test]
    fn test_nan_box_stays_here() {
        let rect = Rectangle { min: [f64::NAN, 1.0], max: [f64::NAN, 2.0] };
        assert_eq!(placement(&rect, CENTER), Placement::Here);
    }

    #[test]
    fn test_query_mask_prunes_children() {
        let query = Rectangle::new(6.0, 0.0, 9.0, 9.0);
        assert_eq!(quadrant_mask(&query, CENTER), [false, false, true, true]);
    }
}
