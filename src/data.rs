//! Built-in plant catalog
//!
//! The static reference entries loaded once at store initialization.
//! Community plants are never part of this set; they are projected from
//! the remote feed at read time.

use crate::models::{AyushSystem, GeoLocation, Plant, PlantCategory};

fn plant(
    id: &str,
    name: &str,
    botanical_name: &str,
    description: &str,
    medicinal_use: &str,
    category: PlantCategory,
    ayush_systems: &[AyushSystem],
    image_url: &str,
    lat: f64,
    lng: f64,
    region: &str,
    likes: u32,
) -> Plant {
    Plant {
        id: id.to_string(),
        name: name.to_string(),
        botanical_name: botanical_name.to_string(),
        description: description.to_string(),
        medicinal_use: medicinal_use.to_string(),
        category,
        ayush_systems: ayush_systems.to_vec(),
        image_url: image_url.to_string(),
        location: GeoLocation {
            lat,
            lng,
            region: region.to_string(),
        },
        likes,
        is_liked: false,
        is_bookmarked: false,
    }
}

/// The reference catalog shipped with the application
pub fn builtin_plants() -> Vec<Plant> {
    use AyushSystem::*;
    use PlantCategory::*;

    vec![
        plant(
            "tulsi",
            "Tulsi",
            "Ocimum tenuiflorum",
            "Holy basil, an aromatic shrub revered across India and grown in household courtyards.",
            "Boosts immunity, relieves cough and cold, reduces stress and supports respiratory health.",
            Immunity,
            &[Ayurveda, Unani, Siddha],
            "/images/plants/tulsi.jpg",
            25.3176,
            82.9739,
            "Uttar Pradesh",
            128,
        ),
        plant(
            "neem",
            "Neem",
            "Azadirachta indica",
            "A fast-growing tree whose leaves, bark and seeds have been used medicinally for millennia.",
            "Purifies blood, treats skin disorders, supports oral hygiene and acts as a natural insect repellent.",
            Skin,
            &[Ayurveda, Unani, Homeopathy],
            "/images/plants/neem.jpg",
            23.2599,
            77.4126,
            "Madhya Pradesh",
            96,
        ),
        plant(
            "ashwagandha",
            "Ashwagandha",
            "Withania somnifera",
            "A small evergreen shrub with yellow flowers, prized as an adaptogen.",
            "Reduces stress and anxiety, improves sleep quality and supports physical endurance.",
            Stress,
            &[Ayurveda, Yoga],
            "/images/plants/ashwagandha.jpg",
            26.9124,
            75.7873,
            "Rajasthan",
            114,
        ),
        plant(
            "turmeric",
            "Turmeric",
            "Curcuma longa",
            "A rhizomatous herb of the ginger family, the golden spice of Indian kitchens.",
            "Anti-inflammatory and antioxidant; aids digestion, wound healing and joint health.",
            Digestion,
            &[Ayurveda, Siddha, Unani],
            "/images/plants/turmeric.jpg",
            10.8505,
            76.2711,
            "Kerala",
            142,
        ),
        plant(
            "aloe-vera",
            "Aloe Vera",
            "Aloe barbadensis miller",
            "A succulent with thick fleshy leaves storing a cooling gel.",
            "Soothes burns and skin irritation, moisturizes, and supports digestive comfort.",
            Skin,
            &[Ayurveda, Unani, Homeopathy],
            "/images/plants/aloe-vera.jpg",
            22.2587,
            71.1924,
            "Gujarat",
            87,
        ),
        plant(
            "vasaka",
            "Vasaka",
            "Justicia adhatoda",
            "Malabar nut, a dense shrub whose leaves are a classic bronchial remedy.",
            "Relieves bronchitis, asthma and persistent cough; loosens phlegm.",
            Respiratory,
            &[Ayurveda, Siddha],
            "/images/plants/vasaka.jpg",
            30.0668,
            79.0193,
            "Uttarakhand",
            54,
        ),
        plant(
            "brahmi",
            "Brahmi",
            "Bacopa monnieri",
            "A creeping marsh herb with small white flowers, a staple of memory tonics.",
            "Enhances memory and concentration, calms the mind and eases anxiety.",
            General,
            &[Ayurveda, Yoga, Homeopathy],
            "/images/plants/brahmi.jpg",
            20.9517,
            85.0985,
            "Odisha",
            73,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_clean() {
        let plants = builtin_plants();
        assert!(!plants.is_empty());

        for p in &plants {
            assert!(!p.is_liked);
            assert!(!p.is_bookmarked);
            assert!(p.category != PlantCategory::Community);
        }
    }

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let plants = builtin_plants();
        let mut ids: Vec<_> = plants.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), plants.len());
    }
}
