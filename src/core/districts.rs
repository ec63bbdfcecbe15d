use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Descriptor returned for names outside the district table
pub const UNKNOWN_DISTRICT_INFO: &str = "Information not available";

/// Tamil Nadu districts supported by the idea generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    Ariyalur,
    Chengalpattu,
    Chennai,
    Coimbatore,
    Cuddalore,
    Dharmapuri,
    Dindigul,
    Erode,
    Kallakurichi,
    Kanchipuram,
    Kanyakumari,
    Karur,
    Krishnagiri,
    Madurai,
    Nagapattinam,
    Namakkal,
    Nilgiris,
    Perambalur,
    Pudukkottai,
    Ramanathapuram,
    Ranipet,
    Salem,
    Sivaganga,
    Tenkasi,
    Thanjavur,
    Theni,
    Thoothukudi,
    Tiruchirappalli,
    Tirunelveli,
    Tirupathur,
    Tiruppur,
    Tiruvallur,
    Tiruvannamalai,
    Tiruvarur,
    Vellore,
    Viluppuram,
    Virudhunagar,
}

impl District {
    /// All districts in selector order
    pub const ALL: [District; 37] = [
        District::Ariyalur,
        District::Chengalpattu,
        District::Chennai,
        District::Coimbatore,
        District::Cuddalore,
        District::Dharmapuri,
        District::Dindigul,
        District::Erode,
        District::Kallakurichi,
        District::Kanchipuram,
        District::Kanyakumari,
        District::Karur,
        District::Krishnagiri,
        District::Madurai,
        District::Nagapattinam,
        District::Namakkal,
        District::Nilgiris,
        District::Perambalur,
        District::Pudukkottai,
        District::Ramanathapuram,
        District::Ranipet,
        District::Salem,
        District::Sivaganga,
        District::Tenkasi,
        District::Thanjavur,
        District::Theni,
        District::Thoothukudi,
        District::Tiruchirappalli,
        District::Tirunelveli,
        District::Tirupathur,
        District::Tiruppur,
        District::Tiruvallur,
        District::Tiruvannamalai,
        District::Tiruvarur,
        District::Vellore,
        District::Viluppuram,
        District::Virudhunagar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            District::Ariyalur => "Ariyalur",
            District::Chengalpattu => "Chengalpattu",
            District::Chennai => "Chennai",
            District::Coimbatore => "Coimbatore",
            District::Cuddalore => "Cuddalore",
            District::Dharmapuri => "Dharmapuri",
            District::Dindigul => "Dindigul",
            District::Erode => "Erode",
            District::Kallakurichi => "Kallakurichi",
            District::Kanchipuram => "Kanchipuram",
            District::Kanyakumari => "Kanyakumari",
            District::Karur => "Karur",
            District::Krishnagiri => "Krishnagiri",
            District::Madurai => "Madurai",
            District::Nagapattinam => "Nagapattinam",
            District::Namakkal => "Namakkal",
            District::Nilgiris => "Nilgiris",
            District::Perambalur => "Perambalur",
            District::Pudukkottai => "Pudukkottai",
            District::Ramanathapuram => "Ramanathapuram",
            District::Ranipet => "Ranipet",
            District::Salem => "Salem",
            District::Sivaganga => "Sivaganga",
            District::Tenkasi => "Tenkasi",
            District::Thanjavur => "Thanjavur",
            District::Theni => "Theni",
            District::Thoothukudi => "Thoothukudi",
            District::Tiruchirappalli => "Tiruchirappalli",
            District::Tirunelveli => "Tirunelveli",
            District::Tirupathur => "Tirupathur",
            District::Tiruppur => "Tiruppur",
            District::Tiruvallur => "Tiruvallur",
            District::Tiruvannamalai => "Tiruvannamalai",
            District::Tiruvarur => "Tiruvarur",
            District::Vellore => "Vellore",
            District::Viluppuram => "Viluppuram",
            District::Virudhunagar => "Virudhunagar",
        }
    }

    /// One-sentence economic profile of the district
    pub fn descriptor(&self) -> &'static str {
        match self {
            District::Ariyalur => "Known for its cement industries and rich limestone resources",
            District::Chengalpattu => "Emerging IT hub and automobile manufacturing",
            District::Chennai => "Capital city known for IT, automobile, and education sectors",
            District::Coimbatore => "Hub for textiles, engineering, and manufacturing",
            District::Cuddalore => "Industrial town with chemical and port-based industries",
            District::Dharmapuri => "Famous for horticulture and mango cultivation",
            District::Dindigul => "Known for lock manufacturing and agriculture",
            District::Erode => "Known for turmeric production and textile industry",
            District::Kallakurichi => "Agriculture and sugar mills are prominent",
            District::Kanchipuram => "Famous for silk weaving and temples",
            District::Kanyakumari => "Tourism and wind energy production",
            District::Karur => "Known for textile exports and bus body manufacturing",
            District::Krishnagiri => "Major producer of mangoes and granite",
            District::Madurai => "Cultural hub and known for jasmine cultivation",
            District::Nagapattinam => "Fisheries and port-based activities",
            District::Namakkal => "Known for poultry farming and transport services",
            District::Nilgiris => "Famous for tea plantations and tourism",
            District::Perambalur => "Cement industries and agricultural activities",
            District::Pudukkottai => "Agriculture and small-scale industries",
            District::Ramanathapuram => "Fisheries and seaweed cultivation",
            District::Ranipet => "Leather tanning and manufacturing hub",
            District::Salem => "Known for steel production and mango cultivation",
            District::Sivaganga => "Famous for agriculture and temple tourism",
            District::Tenkasi => "Tourism and water-based resources",
            District::Thanjavur => "Rice bowl of Tamil Nadu and cultural heritage",
            District::Theni => "Known for agriculture and cardamom cultivation",
            District::Thoothukudi => "Major port and salt production hub",
            District::Tiruchirappalli => "Industrial hub and educational institutions",
            District::Tirunelveli => "Known for Halwa, wind energy, and temples",
            District::Tirupathur => "Leather industry and small-scale enterprises",
            District::Tiruppur => "Knitwear capital of India, focused on garment exports",
            District::Tiruvallur => "Automobile and heavy industries",
            District::Tiruvannamalai => "Pilgrimage center and agricultural activities",
            District::Tiruvarur => "Agriculture, especially paddy cultivation",
            District::Vellore => "Renowned for leather industries and educational institutions",
            District::Viluppuram => "Agriculture and cashew processing",
            District::Virudhunagar => "Famous for fireworks and matchbox industries",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is not in the district table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown district: {0}")]
pub struct UnknownDistrict(pub String);

impl FromStr for District {
    type Err = UnknownDistrict;

    /// Exact, case-sensitive match on the district name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        District::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDistrict(s.to_string()))
    }
}

/// Look up the descriptor for a district name
///
/// Unrecognized names yield [`UNKNOWN_DISTRICT_INFO`].
pub fn district_info(name: &str) -> &'static str {
    name.parse::<District>()
        .map(|d| d.descriptor())
        .unwrap_or(UNKNOWN_DISTRICT_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_37_unique_names() {
        let names: HashSet<&str> = District::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), 37);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for district in District::ALL {
            assert_eq!(district.name().parse::<District>(), Ok(district));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(district_info("chennai"), UNKNOWN_DISTRICT_INFO);
        assert_eq!(
            district_info("Chennai"),
            "Capital city known for IT, automobile, and education sectors"
        );
    }

    #[test]
    fn test_unknown_district() {
        assert_eq!(district_info(""), UNKNOWN_DISTRICT_INFO);
        assert_eq!(district_info("Bengaluru"), UNKNOWN_DISTRICT_INFO);
        assert!("Bengaluru".parse::<District>().is_err());
    }
}
