/// One remote image to fetch. `name` is only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub source_url: String,
    pub sequence_index: usize,
}

impl Resource {
    pub fn new(name: &str, source_url: &str, sequence_index: usize) -> Self {
        Self {
            name: name.to_string(),
            source_url: source_url.to_string(),
            sequence_index,
        }
    }

    /// Builds the item list, numbering each pair by its position.
    pub fn enumerate<'a, I>(pairs: I) -> Vec<Resource>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (name, url))| Resource::new(name, url, index))
            .collect()
    }
}

const COMMONS: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb";

/// Built-in list of (name, path under Wikimedia Commons thumbnails).
const CELEBRITIES: &[(&str, &str)] = &[
    ("아이유 (IU)", "5/5e/191215_IU_at_2019_MMA.jpg/800px-191215_IU_at_2019_MMA.jpg"),
    ("배용준 (Bae Yong-joon)", "5/56/Bae_Yong-joon_in_2009.jpg/800px-Bae_Yong-joon_in_2009.jpg"),
    (
        "송혜교 (Song Hye-kyo)",
        "e/e8/Song_Hye-kyo_at_Bottega_Veneta_Seoul_Hyundai_Department_Store_opening.jpg/800px-Song_Hye-kyo_at_Bottega_Veneta_Seoul_Hyundai_Department_Store_opening.jpg",
    ),
    (
        "장동건 (Jang Dong-gun)",
        "0/03/Jang_Dong-gun_at_Busan_International_Film_Festival_on_October_6%2C_2016.jpg/800px-Jang_Dong-gun_at_Busan_International_Film_Festival_on_October_6%2C_2016.jpg",
    ),
    (
        "이영애 (Lee Young-ae)",
        "5/56/Lee_Young-ae_from_acrofan.jpg/800px-Lee_Young-ae_from_acrofan.jpg",
    ),
    (
        "빅뱅 지드래곤 (G-Dragon)",
        "0/03/G-Dragon_in_Paris%2C_2014.jpg/800px-G-Dragon_in_Paris%2C_2014.jpg",
    ),
    ("김태희 (Kim Tae-hee)", "3/38/Kim_Tae-hee_in_2008.jpg/800px-Kim_Tae-hee_in_2008.jpg"),
    (
        "전지현 (Jun Ji-hyun)",
        "5/54/Jun_Ji-hyun_at_Alexander_McQueen_Savage_Beauty_exhibition_in_London_-_20150316.jpg/800px-Jun_Ji-hyun_at_Alexander_McQueen_Savage_Beauty_exhibition_in_London_-_20150316.jpg",
    ),
    (
        "이민호 (Lee Min-ho)",
        "a/a7/Lee_Min-ho_on_October_2%2C_2020.jpg/800px-Lee_Min-ho_on_October_2%2C_2020.jpg",
    ),
    (
        "손예진 (Son Ye-jin)",
        "f/fa/Son_Ye-jin_at_BIFF_2018_-_Son_Ye-jin_Guestshowcase.jpg/800px-Son_Ye-jin_at_BIFF_2018_-_Son_Ye-jin_Guestshowcase.jpg",
    ),
    (
        "박서준 (Park Seo-joon)",
        "c/cf/Park_Seo-joon_at_Gucci_Pop-Up_Fashion_Show.jpg/800px-Park_Seo-joon_at_Gucci_Pop-Up_Fashion_Show.jpg",
    ),
    (
        "수지 (Suzy)",
        "5/5d/Suzy_at_the_2019_Lancome_My_Wishes_My_Love_Event.jpg/800px-Suzy_at_the_2019_Lancome_My_Wishes_My_Love_Event.jpg",
    ),
    (
        "정해인 (Jung Hae-in)",
        "3/3c/Jung_Hae-in_for_Cartier_Clash_de_Cartier_2019_01.jpg/800px-Jung_Hae-in_for_Cartier_Clash_de_Cartier_2019_01.jpg",
    ),
    (
        "한소희 (Han So-hee)",
        "c/c4/Han_So-hee_in_December_2019.jpg/800px-Han_So-hee_in_December_2019.jpg",
    ),
    ("잔나비 최정훈 (Choi Jung-hoon)", "a/ab/Jannabi_2019.jpg/800px-Jannabi_2019.jpg"),
    (
        "마마무 화사 (Hwasa)",
        "b/ba/HWASA_on_April_26%2C_2019.jpg/800px-HWASA_on_April_26%2C_2019.jpg",
    ),
    (
        "방탄소년단 정국 (Jungkook)",
        "1/10/Jungkook_for_Dispatch_%22Boy_With_Luv%22_MV_behind_the_scene_shooting%2C_15_March_2019_01.jpg/800px-Jungkook_for_Dispatch_%22Boy_With_Luv%22_MV_behind_the_scene_shooting%2C_15_March_2019_01.jpg",
    ),
    ("이하이 (Lee Hi)", "d/d4/Lee_Hi_in_August_2020.jpg/800px-Lee_Hi_in_August_2020.jpg"),
    (
        "에스파 카리나 (Karina)",
        "c/c6/Karina_at_the_MAMAxMnet_in_December_2020_02.png/800px-Karina_at_the_MAMAxMnet_in_December_2020_02.png",
    ),
    (
        "유재석 (Yoo Jae-suk)",
        "5/59/Yoo_Jae-suk_Hangzhou_May_2016.jpg/800px-Yoo_Jae-suk_Hangzhou_May_2016.jpg",
    ),
];

pub fn celebrities() -> Vec<Resource> {
    let urls = CELEBRITIES
        .iter()
        .map(|(name, path)| (*name, format!("{}/{}", COMMONS, path)))
        .collect::<Vec<_>>();

    Resource::enumerate(urls.iter().map(|(name, url)| (*name, url.as_str())))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{celebrities, Resource};

    #[test]
    fn test_enumerate_assigns_positions() {
        let items = Resource::enumerate(vec![("a", "http://a/1"), ("b", "http://b/2")]);

        assert_eq!(items[0], Resource::new("a", "http://a/1", 0));
        assert_eq!(items[1], Resource::new("b", "http://b/2", 1));
    }

    #[test]
    fn test_celebrities_are_numbered_and_unique() {
        let items = celebrities();

        assert_eq!(items.len(), 20);

        assert!(items
            .iter()
            .enumerate()
            .all(|(i, item)| item.sequence_index == i));

        assert!(items
            .iter()
            .all(|item| item.source_url.starts_with("https://upload.wikimedia.org/")));

        assert_eq!(items.iter().map(|item| &item.source_url).unique().count(), 20);
    }
}
