//! Static candidate → position assignments

const POSITIONS: &[(&str, &str)] = &[
    ("栾平", "Python工程师服务器端开发"),
    ("田忠", "Python工程师服务器端开发"),
    ("包涵", "C端产品经理-AIGC领域"),
    ("乔志天", "C端产品经理-AIGC领域"),
    ("高飞虎", "金融海外投资新媒体内容文案编辑运营"),
    ("龙小天", "金融海外投资新媒体内容文案编辑运营"),
];

pub fn position_for(name: &str) -> Option<&'static str> {
    let name = name.trim();
    POSITIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, position)| *position)
}
