/// 位置缓存键
///
/// 坐标各保留 4 位小数后以逗号拼接。四舍五入是有意为之：
/// 同一地点附近的多次点击会坍缩到同一个键上。

pub fn location_key(lat: f64, lng: f64) -> String {
    format!("{lat:.4},{lng:.4}")
}
