//! Per-region presentation: display name, menu artwork and the city tour
//! contact card. Data rows are region-scoped in the database; this table
//! only holds the copy that is not.

use crate::config::DEFAULT_REGION_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityTour {
    pub title: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub reservation_url: &'static str,
    /// Who to contact when no course is listed.
    pub contact_name: &'static str,
}

/// Image file names live under the `/images` static route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuImages {
    pub tour: &'static str,
    pub program: &'static str,
    pub transport: &'static str,
    pub faq: &'static str,
    pub program_main: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    pub code: &'static str,
    pub display_name: &'static str,
    pub images: MenuImages,
    pub city_tour: CityTour,
}

/// Used for the default region code and for any unknown code.
pub const DEFAULT_PROFILE: RegionProfile = RegionProfile {
    code: DEFAULT_REGION_CODE,
    display_name: "경산",
    images: MenuImages {
        tour: "kyeongsan_m_1_info.png",
        program: "kyeongsan_m_2_tour.png",
        transport: "kyeongsan_m_3_traffic.png",
        faq: "kyeongsan_m_4_faq.png",
        program_main: "program_main.png",
    },
    city_tour: CityTour {
        title: "경산 시티투어 안내",
        description: "경산 곳곳의 명소를 하루에 즐기는 관광버스 시티투어입니다 🚌\n\n\
                      • 운영기간: 2025년 4월 17일 ~ 12월\n\
                      • 출발장소: 임당역 5번 출구 전방 100M 버스정류장\n\
                      가볍게 버스만 타고 따라오시면, 경산 구석구석을 안내해 드릴게요.",
        phone: "053-819-0333",
        reservation_url: "https://gsctf.or.kr/",
        contact_name: "경산문화관광재단",
    },
};

pub static REGIONS: &[RegionProfile] = &[DEFAULT_PROFILE];

impl RegionProfile {
    /// Profile for `code`, or the default region's profile when unknown.
    pub fn lookup(code: &str) -> &'static RegionProfile {
        REGIONS
            .iter()
            .find(|r| r.code == code)
            .unwrap_or(&DEFAULT_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_region() {
        assert_eq!(RegionProfile::lookup("gyeongsan").display_name, "경산");
    }

    #[test]
    fn test_lookup_unknown_region_falls_back() {
        let profile = RegionProfile::lookup("atlantis");
        assert_eq!(profile.code, DEFAULT_REGION_CODE);
        assert_eq!(*profile, DEFAULT_PROFILE);
        assert!(REGIONS.iter().any(|r| r.code == DEFAULT_PROFILE.code));
    }

    #[test]
    fn test_city_tour_description_keeps_line_breaks() {
        let profile = RegionProfile::lookup("gyeongsan");
        assert!(profile.city_tour.description.contains("\n• 출발장소"));
    }
}
