//! Built-in Mexico federal highway network.
//!
//! 78 cities and junctions joined by 108 highway segments with approximate
//! driving distances in km. Default dataset for the CLI and a realistic
//! fixture for integration tests.

use crate::graph::{RoadEdge, RoadNode};

#[rustfmt::skip]
const NODES: &[(&str, &str, f64, f64)] = &[
    ("TIJ", "Tijuana", 32.53, -117.04),
    ("MXL", "Mexicali", 32.66, -115.47),
    ("ENS", "Ensenada", 31.87, -116.60),
    ("SLK", "San Luis RC", 32.47, -114.78),
    ("NGL", "Nogales", 31.30, -110.94),
    ("AGP", "Agua Prieta", 31.33, -109.55),
    ("JRZ", "Cd. Juárez", 31.73, -106.49),
    ("OJG", "Ojinaga", 29.55, -104.41),
    ("PIE", "Piedras Negras", 28.70, -100.52),
    ("NLD", "Nuevo Laredo", 27.48, -99.52),
    ("REY", "Reynosa", 26.09, -98.28),
    ("MTM", "Matamoros", 25.87, -97.51),
    ("CJU", "Cd. Acuña", 29.32, -100.93),
    ("HMO", "Hermosillo", 29.07, -110.96),
    ("GYM", "Guaymas", 27.92, -110.90),
    ("CLN", "Culiacán", 24.80, -107.39),
    ("LOS", "Los Mochis", 25.79, -109.02),
    ("MZT", "Mazatlán", 23.23, -106.41),
    ("DGO", "Durango", 24.03, -104.67),
    ("TPC", "Tepic", 21.51, -104.89),
    ("GDL", "Guadalajara", 20.67, -103.35),
    ("AGS", "Aguascalientes", 21.88, -102.28),
    ("ZAC", "Zacatecas", 22.77, -102.58),
    ("SLP", "San Luis Potosí", 22.15, -100.97),
    ("CHH", "Chihuahua", 28.63, -106.07),
    ("TOR", "Torreón", 25.55, -103.43),
    ("SAL", "Saltillo", 25.43, -101.00),
    ("MTY", "Monterrey", 25.67, -100.31),
    ("VIC", "Cd. Victoria", 23.73, -99.14),
    ("TMP", "Tampico", 22.25, -97.86),
    ("GTO", "Guanajuato", 21.02, -101.26),
    ("QRO", "Querétaro", 20.59, -100.39),
    ("LEO", "León", 21.12, -101.68),
    ("MOR", "Morelia", 19.70, -101.18),
    ("COL", "Colima", 19.24, -103.72),
    ("MAN", "Manzanillo", 19.05, -104.32),
    ("GUR", "Cd. Guzmán", 19.71, -103.46),
    ("PVR", "Puerto Vallarta", 20.61, -105.25),
    ("ZIT", "Zitácuaro", 19.44, -100.36),
    ("TOL", "Toluca", 19.29, -99.65),
    ("CDMX", "Ciudad de México", 19.43, -99.13),
    ("CUE", "Cuernavaca", 18.92, -99.23),
    ("PUE", "Puebla", 19.05, -98.21),
    ("TLA", "Tlaxcala", 19.32, -98.24),
    ("PAC", "Pachuca", 20.12, -98.73),
    ("TUL", "Tula", 20.05, -99.34),
    ("SAZ", "Sahagun Junc.", 19.83, -98.57),
    ("ORZ", "Orizaba", 18.85, -97.10),
    ("XAL", "Xalapa", 19.54, -96.91),
    ("VER", "Veracruz", 19.18, -96.14),
    ("OAX", "Oaxaca", 17.07, -96.72),
    ("SAL2", "Salina Cruz", 16.17, -95.20),
    ("TCO", "Tehuantepec", 16.32, -95.24),
    ("MAT", "Matías Romero", 16.88, -95.04),
    ("COA", "Coatzacoalcos", 18.15, -94.44),
    ("VIL", "Villahermosa", 17.99, -92.92),
    ("PAL", "Palenque", 17.52, -91.98),
    ("MER", "Mérida", 20.97, -89.62),
    ("CMP", "Campeche", 19.85, -90.53),
    ("FCA", "Frontera Junc.", 18.33, -89.55),
    ("CAN", "Cancún", 21.16, -86.85),
    ("CHE", "Chetumal", 18.50, -88.30),
    ("TGU", "Tuxtla Gutiérrez", 16.75, -93.12),
    ("TAP", "Tapachula", 14.90, -92.26),
    ("ACA", "Acapulco", 16.86, -99.88),
    ("CHI", "Chilpancingo", 17.55, -99.51),
    ("ZHU", "Zihuatanejo", 17.64, -101.55),
    ("LAZ", "Lázaro Cárdenas", 17.96, -102.19),
    ("PAT", "Pátzcuaro", 19.51, -101.62),
    ("IRA", "Irapuato", 20.67, -101.35),
    ("CEL", "Celaya", 20.52, -100.82),
    ("HIR", "Hidalgo Parral", 26.93, -105.66),
    ("LCP", "La Paz BCS", 24.14, -110.31),
    ("CBO", "Cd. Obregón", 27.48, -109.94),
    ("NAV", "Navojoa", 27.08, -109.44),
    ("CAR", "Cardel Junc.", 19.36, -96.37),
    ("TUX", "Tuxtepec", 18.09, -96.12),
    ("OCO", "Oax-Cuacnopalan", 18.20, -97.00),
];

#[rustfmt::skip]
const EDGES: &[(&str, &str, f64)] = &[
    ("TIJ", "MXL", 200.0),
    ("MXL", "SLK", 100.0),
    ("SLK", "NGL", 290.0),
    ("NGL", "AGP", 200.0),
    ("AGP", "JRZ", 310.0),
    ("NLD", "REY", 110.0),
    ("REY", "MTM", 90.0),
    ("PIE", "CJU", 70.0),
    ("NGL", "HMO", 303.0),
    ("HMO", "GYM", 136.0),
    ("GYM", "CBO", 119.0),
    ("CBO", "NAV", 55.0),
    ("NAV", "LOS", 73.0),
    ("LOS", "CLN", 213.0),
    ("CLN", "MZT", 218.0),
    ("MZT", "TPC", 316.0),
    ("TPC", "GDL", 175.0),
    ("TPC", "PVR", 157.0),
    ("MZT", "DGO", 317.0),
    ("DGO", "TOR", 330.0),
    ("TOR", "MTY", 310.0),
    ("JRZ", "CHH", 370.0),
    ("CHH", "HIR", 165.0),
    ("HIR", "DGO", 200.0),
    ("DGO", "ZAC", 315.0),
    ("GDL", "ZAC", 195.0),
    ("ZAC", "SAL", 310.0),
    ("SAL", "MTY", 85.0),
    ("CDMX", "QRO", 220.0),
    ("QRO", "SLP", 210.0),
    ("SLP", "SAL", 270.0),
    ("MTY", "NLD", 235.0),
    ("MTY", "VIC", 300.0),
    ("VIC", "TMP", 247.0),
    ("VIC", "NLD", 183.0),
    ("PIE", "MTY", 242.0),
    ("SLP", "TMP", 445.0),
    ("SLP", "VIC", 264.0),
    ("CDMX", "TOL", 67.0),
    ("CDMX", "PAC", 92.0),
    ("CDMX", "PUE", 135.0),
    ("CDMX", "CUE", 90.0),
    ("CDMX", "TUL", 102.0),
    ("CDMX", "ZIT", 203.0),
    ("TOL", "ZIT", 140.0),
    ("TOL", "IRA", 156.0),
    ("QRO", "GTO", 104.0),
    ("GTO", "IRA", 51.0),
    ("IRA", "LEO", 58.0),
    ("LEO", "AGS", 106.0),
    ("AGS", "ZAC", 120.0),
    ("QRO", "CEL", 60.0),
    ("CEL", "IRA", 55.0),
    ("CEL", "MOR", 185.0),
    ("MOR", "GDL", 336.0),
    ("MOR", "ZIT", 133.0),
    ("MOR", "PAT", 46.0),
    ("PAT", "GDL", 56.0),
    ("GDL", "COL", 97.0),
    ("COL", "MAN", 97.0),
    ("GDL", "GUR", 143.0),
    ("GUR", "COL", 59.0),
    ("GDL", "AGS", 225.0),
    ("MAN", "ZHU", 342.0),
    ("LAZ", "MOR", 280.0),
    ("LAZ", "COL", 277.0),
    ("ACA", "CHI", 131.0),
    ("CHI", "CDMX", 265.0),
    ("ACA", "ZHU", 274.0),
    ("ZHU", "LAZ", 65.0),
    ("PUE", "ORZ", 121.0),
    ("ORZ", "VER", 122.0),
    ("VER", "XAL", 106.0),
    ("XAL", "PAC", 263.0),
    ("VER", "COA", 308.0),
    ("CAR", "VER", 40.0),
    ("CAR", "XAL", 55.0),
    ("PUE", "TLA", 36.0),
    ("PAC", "SAZ", 55.0),
    ("SAZ", "PUE", 75.0),
    ("TMP", "VER", 337.0),
    ("TMP", "XAL", 310.0),
    ("PUE", "OCO", 246.0),
    ("OCO", "OAX", 75.0),
    ("OAX", "TCO", 250.0),
    ("TCO", "SAL2", 55.0),
    ("TCO", "MAT", 72.0),
    ("MAT", "COA", 190.0),
    ("COA", "VIL", 228.0),
    ("VIL", "PAL", 165.0),
    ("VIL", "CMP", 195.0),
    ("CMP", "MER", 195.0),
    ("MER", "CAN", 315.0),
    ("CAN", "CHE", 385.0),
    ("CHE", "FCA", 165.0),
    ("FCA", "VIL", 245.0),
    ("TGU", "VIL", 289.0),
    ("TGU", "OAX", 485.0),
    ("TGU", "TAP", 285.0),
    ("OAX", "CHI", 250.0),
    ("COA", "TUX", 165.0),
    ("TUX", "OAX", 252.0),
    ("TUX", "VER", 296.0),
    ("SAL2", "TGU", 170.0),
    ("TIJ", "ENS", 108.0),
    ("ENS", "LCP", 1059.0),
    ("OJG", "CHH", 228.0),
    ("OJG", "PIE", 367.0),
];

/// Node and edge tables for the federal highway network.
pub fn mexico_federal_highways() -> (Vec<RoadNode>, Vec<RoadEdge>) {
    let nodes = NODES
        .iter()
        .map(|&(id, name, lat, lon)| RoadNode {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        })
        .collect();
    let edges = EDGES
        .iter()
        .map(|&(from, to, km)| RoadEdge {
            from_id: from.to_string(),
            to_id: to.to_string(),
            weight_km: km,
        })
        .collect();
    (nodes, edges)
}
