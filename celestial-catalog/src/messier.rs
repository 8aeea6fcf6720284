//! The Messier catalog: 110 deep-sky objects with J2000.0 positions.
//!
//! Positions are decimal degrees. Reference links point at the NASA Hubble
//! Messier pages and are derived from the object number.

use crate::object::CatalogObject;

pub const REFERENCE_LINK_BASE: &str =
    "https://science.nasa.gov/mission/hubble/science/explore-the-night-sky/hubble-messier-catalog/messier-";

pub const MESSIER_COUNT: usize = 110;

/// `(number, ra_deg, dec_deg, name)` in catalog order.
#[rustfmt::skip]
const MESSIER: [(u16, f64, f64, &str); MESSIER_COUNT] = [
    (1, 83.6331, 22.0145, "Crab Nebula"),
    (2, 323.3625, -0.8233, "Globular Cluster in Aquarius"),
    (3, 205.5484, 28.3772, "Globular Cluster in Canes Venatici"),
    (4, 245.8967, -26.5258, "Globular Cluster in Scorpius"),
    (5, 229.6383, 2.0819, "Globular Cluster in Serpens"),
    (6, 265.0800, -32.2525, "Butterfly Cluster"),
    (7, 268.4625, -34.7933, "Ptolemy Cluster"),
    (8, 270.9250, -24.3800, "Lagoon Nebula"),
    (9, 262.8042, -18.5167, "Globular Cluster in Ophiuchus"),
    (10, 254.2875, -4.0997, "Globular Cluster in Ophiuchus"),
    (11, 282.7708, -6.2700, "Wild Duck Cluster"),
    (12, 251.8083, -1.9483, "Globular Cluster in Ophiuchus"),
    (13, 250.4217, 36.4611, "Great Hercules Cluster"),
    (14, 264.4000, -3.2458, "Globular Cluster in Ophiuchus"),
    (15, 322.4938, 12.1667, "Pegasus Cluster"),
    (16, 274.7000, -13.8067, "Eagle Nebula"),
    (17, 275.2000, -16.1750, "Omega Nebula"),
    (18, 275.4750, -17.1042, "Open Cluster in Sagittarius"),
    (19, 255.6579, -26.2678, "Globular Cluster in Ophiuchus"),
    (20, 270.6554, -23.0144, "Trifid Nebula"),
    (21, 270.6500, -22.4861, "Open Cluster in Sagittarius"),
    (22, 279.1000, -23.9047, "Sagittarius Cluster"),
    (23, 269.1500, -19.0167, "Open Cluster in Sagittarius"),
    (24, 273.5583, -18.4633, "Sagittarius Star Cloud"),
    (25, 279.1000, -19.2500, "Open Cluster in Sagittarius"),
    (26, 281.2500, -9.3833, "Open Cluster in Scutum"),
    (27, 299.9000, 22.7219, "Dumbbell Nebula"),
    (28, 276.1375, -24.8697, "Globular Cluster in Sagittarius"),
    (29, 305.9833, 38.5333, "Open Cluster in Cygnus"),
    (30, 325.0925, -23.1797, "Globular Cluster in Capricornus"),
    (31, 10.6847, 41.2690, "Andromeda Galaxy"),
    (32, 10.6743, 40.8652, "Dwarf Elliptical Galaxy in Andromeda"),
    (33, 23.4621, 30.6602, "Triangulum Galaxy"),
    (34, 40.5000, 42.7833, "Open Cluster in Perseus"),
    (35, 92.2250, 24.3333, "Open Cluster in Gemini"),
    (36, 84.0833, 34.1367, "Open Cluster in Auriga"),
    (37, 88.0750, 32.5533, "Open Cluster in Auriga"),
    (38, 82.1883, 35.8500, "Open Cluster in Auriga"),
    (39, 322.9958, 48.4333, "Open Cluster in Cygnus"),
    (40, 183.7792, 58.0833, "Double Star in Ursa Major"),
    (41, 101.5000, -20.7500, "Open Cluster in Canis Major"),
    (42, 83.8221, -5.3911, "Orion Nebula"),
    (43, 83.8750, -5.2667, "De Mairan's Nebula"),
    (44, 130.0250, 19.9833, "Beehive Cluster (Praesepe)"),
    (45, 56.7500, 24.1167, "Pleiades"),
    (46, 114.1500, -14.8167, "Open Cluster in Puppis"),
    (47, 114.1500, -14.4833, "Open Cluster in Puppis"),
    (48, 123.1500, -5.8000, "Open Cluster in Hydra"),
    (49, 187.4458, 8.0000, "Elliptical Galaxy in Virgo"),
    (50, 105.7333, -8.3333, "Open Cluster in Monoceros"),
    (51, 202.4708, 47.1953, "Whirlpool Galaxy"),
    (52, 351.2000, 61.5833, "Open Cluster in Cassiopeia"),
    (53, 198.2308, 18.1683, "Globular Cluster in Coma Berenices"),
    (54, 283.7625, -30.4797, "Globular Cluster in Sagittarius"),
    (55, 294.9983, -30.9647, "Globular Cluster in Sagittarius"),
    (56, 289.1479, 30.1833, "Globular Cluster in Lyra"),
    (57, 283.3963, 33.0283, "Ring Nebula"),
    (58, 189.4300, 11.8183, "Spiral Galaxy in Virgo"),
    (59, 190.4908, 11.6469, "Elliptical Galaxy in Virgo"),
    (60, 190.9167, 11.5500, "Elliptical Galaxy in Virgo"),
    (61, 185.4788, 4.4733, "Spiral Galaxy in Virgo"),
    (62, 255.3000, -30.1111, "Globular Cluster in Ophiuchus"),
    (63, 198.9567, 42.0292, "Sunflower Galaxy"),
    (64, 194.1829, 21.6825, "Black Eye Galaxy"),
    (65, 169.7250, 13.0925, "Spiral Galaxy in Leo"),
    (66, 170.0625, 12.9919, "Spiral Galaxy in Leo"),
    (67, 132.8250, 11.8167, "Open Cluster in Cancer"),
    (68, 189.8667, -26.7447, "Globular Cluster in Hydra"),
    (69, 277.8463, -32.3483, "Globular Cluster in Sagittarius"),
    (70, 280.8033, -32.2922, "Globular Cluster in Sagittarius"),
    (71, 298.4433, 18.7797, "Globular Cluster in Sagitta"),
    (72, 313.3667, -12.5378, "Globular Cluster in Aquarius"),
    (73, 314.7500, -12.6333, "Asterism in Aquarius"),
    (74, 24.1742, 15.7833, "Phantom Galaxy"),
    (75, 302.4842, -21.9225, "Globular Cluster in Sagittarius"),
    (76, 25.5917, 51.5733, "Little Dumbbell Nebula"),
    (77, 40.6692, 0.0133, "Cetus A Galaxy"),
    (78, 86.7000, 0.0500, "Diffuse Nebula in Orion"),
    (79, 81.0450, -24.5242, "Globular Cluster in Lepus"),
    (80, 244.2600, -22.9750, "Globular Cluster in Scorpius"),
    (81, 148.8883, 69.0653, "Bode's Galaxy"),
    (82, 148.9683, 69.6797, "Cigar Galaxy"),
    (83, 204.2533, -29.8650, "Southern Pinwheel Galaxy"),
    (84, 186.2650, 12.8875, "Elliptical Galaxy in Virgo"),
    (85, 186.3500, 18.1910, "Lenticular Galaxy in Coma Berenices"),
    (86, 186.5490, 12.9460, "Elliptical Galaxy in Virgo Cluster"),
    (87, 187.7060, 12.3910, "Virgo A (Supermassive Black Hole Galaxy)"),
    (88, 187.9970, 14.4210, "Spiral Galaxy in Coma Berenices"),
    (89, 188.9160, 12.5560, "Elliptical Galaxy in Virgo Cluster"),
    (90, 189.2070, 13.1630, "Spiral Galaxy in Virgo Cluster"),
    (91, 188.8600, 14.4960, "Barred Spiral Galaxy in Coma Berenices"),
    (92, 259.2810, 43.1360, "Globular Cluster in Hercules"),
    (93, 116.1250, -23.8570, "Open Cluster in Puppis"),
    (94, 192.7210, 41.1200, "Spiral Galaxy in Canes Venatici"),
    (95, 160.9900, 11.7040, "Lenticular Galaxy in Leo"),
    (96, 161.6900, 11.8200, "Spiral Galaxy in Leo"),
    (97, 168.6990, 55.0190, "Owl Nebula"),
    (98, 183.4510, 14.9000, "Spiral Galaxy in Coma Berenices"),
    (99, 184.7070, 14.4170, "Spiral Galaxy in Coma Berenices"),
    (100, 185.7290, 15.8220, "Spiral Galaxy in Coma Berenices"),
    (101, 210.8020, 54.3490, "Pinwheel Galaxy"),
    (102, 226.6230, 55.7630, "Lenticular Galaxy in Draco"),
    (103, 23.3420, 60.6580, "Open Cluster in Cassiopeia"),
    (104, 189.9980, -11.6230, "Sombrero Galaxy"),
    (105, 161.9570, 12.5820, "Elliptical Galaxy in Leo"),
    (106, 184.7400, 47.3040, "Spiral Galaxy in Canes Venatici"),
    (107, 248.1330, -13.0540, "Globular Cluster in Ophiuchus"),
    (108, 167.8790, 55.6740, "Spiral Galaxy in Ursa Major"),
    (109, 179.4000, 53.3750, "Barred Spiral Galaxy in Ursa Major"),
    (110, 10.0920, 41.6850, "Dwarf Elliptical Galaxy in Andromeda"),
];

pub fn reference_link(number: u16) -> String {
    format!("{REFERENCE_LINK_BASE}{number}/")
}

/// All Messier objects in catalog order (M1 first).
pub fn messier_objects() -> Vec<CatalogObject> {
    MESSIER
        .iter()
        .map(|&(number, ra_deg, dec_deg, name)| {
            CatalogObject::new(
                format!("m{number}"),
                number,
                ra_deg,
                dec_deg,
                name,
                reference_link(number),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_sequential() {
        for (i, row) in MESSIER.iter().enumerate() {
            assert_eq!(row.0 as usize, i + 1);
        }
    }

    #[test]
    fn test_positions_in_range() {
        for (number, ra, dec, name) in MESSIER {
            assert!((0.0..360.0).contains(&ra), "M{number} {name}: ra {ra}");
            assert!((-90.0..=90.0).contains(&dec), "M{number} {name}: dec {dec}");
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_reference_link() {
        assert_eq!(
            reference_link(31),
            "https://science.nasa.gov/mission/hubble/science/explore-the-night-sky/hubble-messier-catalog/messier-31/"
        );
    }

    #[test]
    fn test_known_entries() {
        let objects = messier_objects();
        assert_eq!(objects.len(), MESSIER_COUNT);

        let m31 = &objects[30];
        assert_eq!(m31.id(), "m31");
        assert_eq!(m31.name(), "Andromeda Galaxy");
        assert!((m31.position().ra().degrees() - 10.6847).abs() < 1e-9);
        assert!((m31.position().dec().degrees() - 41.2690).abs() < 1e-9);

        let m104 = &objects[103];
        assert_eq!(m104.name(), "Sombrero Galaxy");
        assert!((m104.position().dec().degrees() + 11.623).abs() < 1e-9);
    }

    #[test]
    fn test_virgo_galaxies_are_in_degrees() {
        // M84 through M91 sit within a few degrees of each other near 12h30m
        let objects = messier_objects();
        for object in &objects[83..91] {
            let ra_h = object.position().ra().hours();
            assert!((12.2..12.7).contains(&ra_h), "{}: {ra_h}h", object.id());
        }
    }
}
