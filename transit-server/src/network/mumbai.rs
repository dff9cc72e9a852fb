//! Embedded Mumbai suburban network data.
//!
//! Stations, line sequences and interchange declarations for the
//! Western, Central, Harbour and Trans-Harbour lines. This is static
//! configuration; [`super::NetworkModel::validate`] checks it at
//! startup along with any other model.

use crate::domain::{LatLng, LineName, Station, StationCode};

use super::model::{Interchange, LineRoute, NetworkModel};

/// Line name constants for the Mumbai network.
pub mod lines {
    pub const WESTERN: &str = "Western";
    pub const CENTRAL: &str = "Central";
    pub const HARBOUR: &str = "Harbour";
    pub const TRANS_HARBOUR: &str = "Trans-Harbour";
}

/// One row of the station table:
/// (code, name, lines, lat, lng, zone, km from terminal).
type Row = (
    &'static str,
    &'static str,
    &'static [&'static str],
    f64,
    f64,
    u8,
    u32,
);

use lines::{CENTRAL as C, HARBOUR as H, TRANS_HARBOUR as T, WESTERN as W};

#[rustfmt::skip]
const STATIONS: &[Row] = &[
    // Western line, Churchgate outwards
    ("CCG",   "Churchgate",                              &[W],    18.9353, 72.8270, 1, 0),
    ("MEL",   "Marine Lines",                            &[W],    18.9387, 72.8235, 1, 2),
    ("CYR",   "Charni Road",                             &[W],    18.9506, 72.8190, 1, 4),
    ("GTB",   "Grant Road",                              &[W],    18.9629, 72.8147, 1, 6),
    ("BCT",   "Mumbai Central",                          &[W],    18.9690, 72.8194, 1, 8),
    ("MHD",   "Mahalaxmi",                               &[W],    18.9827, 72.8235, 1, 10),
    ("LPA",   "Lower Parel",                             &[W],    18.9963, 72.8266, 1, 12),
    ("PR",    "Parel",                                   &[W, C], 19.0030, 72.8330, 1, 16),
    ("DR",    "Dadar",                                   &[W, C], 19.0183, 72.8421, 1, 18),
    ("MR",    "Matunga Road",                            &[W],    19.0270, 72.8480, 1, 20),
    ("MM",    "Mahim Junction",                          &[W, H], 19.0410, 72.8420, 1, 17),
    ("BA",    "Bandra",                                  &[W, H], 19.0546, 72.8400, 1, 24),
    ("KHRA",  "Khar Road",                               &[W],    19.0696, 72.8370, 1, 27),
    ("STC",   "Santacruz",                               &[W],    19.0810, 72.8370, 1, 30),
    ("VLP",   "Vile Parle",                              &[W],    19.0993, 72.8470, 1, 33),
    ("ADH",   "Andheri",                                 &[W],    19.1197, 72.8468, 2, 38),
    ("JOS",   "Jogeshwari",                              &[W],    19.1347, 72.8478, 2, 42),
    ("RAM",   "Ram Mandir",                              &[W],    19.1442, 72.8421, 2, 45),
    ("GMO",   "Goregaon",                                &[W],    19.1626, 72.8497, 2, 48),
    ("MDL",   "Malad",                                   &[W],    19.1875, 72.8489, 2, 54),
    ("KVI",   "Kandivli",                                &[W],    19.2041, 72.8540, 2, 59),
    ("BVI",   "Borivali",                                &[W],    19.2307, 72.8567, 2, 64),
    ("DHR",   "Dahisar",                                 &[W],    19.2500, 72.8600, 3, 68),
    ("MRA",   "Mira Road",                               &[W],    19.2800, 72.8700, 3, 72),
    ("BYR",   "Bhayandar",                               &[W],    19.3000, 72.8800, 3, 76),
    ("NGN",   "Naigaon",                                 &[W],    19.3400, 72.8900, 3, 80),
    ("BSR",   "Vasai Road",                              &[W],    19.3732, 72.8330, 3, 84),
    ("NLL",   "Nallasopara",                             &[W],    19.3900, 72.8300, 3, 88),
    ("VR",    "Virar",                                   &[W],    19.4550, 72.8117, 3, 92),
    ("VTN",   "Vaitarna",                                &[W],    19.4400, 72.8100, 3, 96),
    ("SAH",   "Saphale",                                 &[W],    19.4100, 72.8000, 3, 100),
    ("KRD",   "Kelve Road",                              &[W],    19.3800, 72.7900, 3, 104),
    ("PLG",   "Palghar",                                 &[W],    19.3500, 72.7800, 3, 108),
    ("UML",   "Umroli",                                  &[W],    19.3200, 72.7700, 3, 112),
    ("BOR",   "Boisar",                                  &[W],    19.8000, 72.7500, 3, 116),
    ("VGN",   "Vangaon",                                 &[W],    19.8500, 72.7400, 3, 120),
    ("DRD",   "Dahanu Road",                             &[W],    19.9700, 72.7200, 3, 124),
    // Central line, CSMT outwards
    ("CSMT",  "Chhatrapati Shivaji Maharaj Terminus",    &[C, H], 18.9402, 72.8358, 1, 0),
    ("MSD",   "Masjid",                                  &[C],    18.9478, 72.8420, 1, 2),
    ("SNRD",  "Sandhurst Road",                          &[C],    18.9520, 72.8450, 1, 3),
    ("BY",    "Byculla",                                 &[C],    18.9750, 72.8310, 1, 4),
    ("CNPK",  "Chinchpokli",                             &[C],    18.9890, 72.8320, 1, 8),
    ("CU",    "Currey Road",                             &[C],    19.0010, 72.8410, 1, 6),
    ("MTNG",  "Matunga",                                 &[C],    19.0270, 72.8480, 1, 20),
    ("SION",  "Sion",                                    &[C],    19.0410, 72.8700, 1, 15),
    ("KURLA", "Kurla",                                   &[C, H], 19.0726, 72.8796, 1, 22),
    ("VID",   "Vidyavihar",                              &[C],    19.0822, 72.8970, 1, 26),
    ("GKP",   "Ghatkopar",                               &[C],    19.0863, 72.9081, 1, 29),
    ("VK",    "Vikhroli",                                &[C],    19.1094, 72.9250, 2, 33),
    ("KJM",   "Kanjurmarg",                              &[C],    19.1320, 72.9370, 2, 38),
    ("BND",   "Bhandup",                                 &[C],    19.1480, 72.9390, 2, 42),
    ("NHR",   "Nahur",                                   &[C],    19.1640, 72.9520, 2, 45),
    ("MLND",  "Mulund",                                  &[C],    19.1720, 72.9560, 2, 49),
    ("TNA",   "Thane",                                   &[C, T], 19.1860, 72.9750, 2, 54),
    ("KLVA",  "Kalwa",                                   &[C],    19.1800, 72.9600, 2, 51),
    ("KYN",   "Kalyan Junction",                         &[C],    19.2430, 73.1350, 3, 58),
    ("ULNR",  "Ulhasnagar",                              &[C],    19.2200, 73.1100, 3, 62),
    ("ABN",   "Ambarnath",                               &[C],    19.2000, 73.1300, 3, 66),
    ("BAP",   "Badlapur",                                &[C],    19.1500, 73.1500, 3, 70),
    ("VGI",   "Vangani",                                 &[C],    19.1000, 73.1700, 3, 74),
    ("KJT",   "Karjat",                                  &[C],    19.0500, 73.2000, 3, 78),
    ("NR",    "Neral",                                   &[C],    19.0200, 73.1800, 3, 76),
    ("MBQ",   "Mumbra",                                  &[C],    19.0500, 73.0000, 2, 56),
    ("KOPR",  "Kopar",                                   &[C],    19.0600, 73.0100, 2, 59),
    ("TLA",   "Titwala",                                 &[C],    19.3000, 73.0800, 3, 82),
    ("KDV",   "Khadavli",                                &[C],    19.3100, 73.0900, 3, 84),
    ("KP",    "Khopoli",                                 &[C],    18.7800, 73.3600, 3, 88),
    ("KSRA",  "Kasara",                                  &[C],    19.4400, 73.4800, 3, 92),
    // Harbour line additions
    ("DKRD",  "Dockyard Road",                           &[H],    18.9567, 72.8445, 1, 5),
    ("WDL",   "Wadala Road",                             &[H],    19.0170, 72.8300, 1, 13),
    ("KCE",   "King's Circle",                           &[H],    19.0270, 72.8480, 1, 15),
    ("TKNG",  "Tilak Nagar",                             &[H],    19.0889, 72.8911, 1, 26),
    ("CHM",   "Chembur",                                 &[H],    19.0622, 72.8978, 1, 29),
    ("GV",    "Govandi",                                 &[H],    19.0544, 72.9156, 1, 33),
    ("MNK",   "Mankhurd",                                &[H],    19.0456, 72.9289, 1, 37),
    ("VSH",   "Vashi",                                   &[H, T], 19.0767, 72.9989, 2, 45),
    ("SAP",   "Sanpada",                                 &[H, T], 19.0689, 73.0089, 2, 48),
    ("JUI",   "Juinagar",                                &[H, T], 19.0611, 73.0189, 2, 52),
    ("NRL",   "Nerul",                                   &[H, T], 19.0533, 73.0289, 2, 56),
    ("SWD",   "Seawoods-Darave",                         &[H, T], 19.0200, 73.0300, 2, 60),
    ("BUP",   "CBD Belapur",                             &[H, T], 19.0100, 73.0400, 2, 63),
    ("KGA",   "Kharghar",                                &[H, T], 19.0000, 73.0500, 2, 66),
    ("MSV",   "Mansarovar",                              &[H, T], 18.9900, 73.0600, 2, 69),
    ("KND",   "Khandeshwar",                             &[H, T], 18.9800, 73.0700, 2, 72),
    ("PNVL",  "Panvel",                                  &[H, T], 18.9894, 73.1175, 3, 67),
    // Trans-Harbour line additions
    ("DGA",   "Digha Gaon",                              &[T],    19.2000, 73.0000, 2, 57),
    ("AI",    "Airoli",                                  &[T],    19.1500, 72.9800, 2, 60),
    ("RBL",   "Rabale",                                  &[T],    19.1400, 72.9700, 2, 63),
    ("GHS",   "Ghansoli",                                &[T],    19.1200, 72.9600, 2, 66),
    ("KPH",   "Koparkhairane",                           &[T],    19.1100, 72.9500, 2, 69),
    ("TBH",   "Turbhe",                                  &[T],    19.1000, 72.9400, 2, 72),
];

#[rustfmt::skip]
const WESTERN_SEQ: &[&str] = &[
    "CCG", "MEL", "CYR", "GTB", "BCT", "MHD", "LPA", "PR", "DR", "MR",
    "MM", "BA", "KHRA", "STC", "VLP", "ADH", "JOS", "RAM", "GMO", "MDL",
    "KVI", "BVI", "DHR", "MRA", "BYR", "NGN", "BSR", "NLL", "VR", "VTN",
    "SAH", "KRD", "PLG", "UML", "BOR", "VGN", "DRD",
];

#[rustfmt::skip]
const CENTRAL_SEQ: &[&str] = &[
    "CSMT", "MSD", "SNRD", "BY", "CNPK", "CU", "PR", "DR", "MTNG", "SION",
    "KURLA", "VID", "GKP", "VK", "KJM", "BND", "NHR", "MLND", "TNA", "KLVA",
    "KYN", "ULNR", "ABN", "BAP", "VGI", "KJT", "NR", "MBQ", "KOPR", "TLA",
    "KDV", "KP", "KSRA",
];

#[rustfmt::skip]
const HARBOUR_SEQ: &[&str] = &[
    "CSMT", "DKRD", "WDL", "KCE", "MM", "BA", "KURLA", "TKNG", "CHM", "GV",
    "MNK", "VSH", "SAP", "JUI", "NRL", "SWD", "BUP", "KGA", "MSV", "KND",
    "PNVL",
];

#[rustfmt::skip]
const TRANS_HARBOUR_SEQ: &[&str] = &[
    "TNA", "DGA", "AI", "RBL", "GHS", "KPH", "TBH", "VSH", "SAP", "JUI",
    "NRL", "SWD", "BUP", "KGA", "MSV", "KND", "PNVL",
];

/// (station, participating lines) for each declared interchange.
const INTERCHANGES: &[(&str, &[&str])] = &[
    ("DR", &[W, C]),
    ("BA", &[W, H]),
    ("KURLA", &[C, H]),
    ("TNA", &[C, T]),
    ("VSH", &[H, T]),
    ("CSMT", &[C, H]),
    ("PNVL", &[H, T]),
];

/// The Mumbai suburban network model.
///
/// The embedded tables only contain codes that parse; any edit that
/// breaks an invariant is caught by `validate` at startup.
pub fn mumbai() -> NetworkModel {
    let stations = STATIONS
        .iter()
        .map(|(code, name, lines, lat, lng, zone, dist)| Station {
            code: parse(code),
            name: (*name).to_string(),
            lines: lines.iter().map(LineName::new).collect(),
            coordinates: Some(LatLng::new(*lat, *lng)),
            zone: Some(*zone),
            distance_from_terminal: *dist,
        })
        .collect();

    let routes = vec![
        route(W, WESTERN_SEQ),
        route(C, CENTRAL_SEQ),
        route(H, HARBOUR_SEQ),
        route(T, TRANS_HARBOUR_SEQ),
    ];

    let interchanges = INTERCHANGES
        .iter()
        .map(|(station, lines)| Interchange {
            station: parse(station),
            lines: lines.iter().map(LineName::new).collect(),
        })
        .collect();

    NetworkModel {
        stations,
        routes,
        interchanges,
    }
}

fn parse(code: &str) -> StationCode {
    StationCode::parse(code).expect("embedded station code is valid")
}

fn route(name: &str, seq: &[&str]) -> LineRoute {
    LineRoute::new(name, seq.iter().map(|c| parse(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{GraphConfig, RailGraph};

    #[test]
    fn embedded_model_is_valid() {
        mumbai().validate().expect("embedded network must validate");
    }

    #[test]
    fn every_sequence_code_has_a_station() {
        // validate() covers this, but keep the failure message direct
        let model = mumbai();
        let map = model.station_map();
        for route in &model.routes {
            for code in &route.stations {
                assert!(map.contains_key(code), "missing station {code}");
            }
        }
    }

    #[test]
    fn station_count() {
        assert_eq!(mumbai().stations.len(), 91);
    }

    #[test]
    fn builds_into_graph() {
        let model = mumbai();
        let graph = RailGraph::build(&model, GraphConfig::default()).unwrap();
        assert_eq!(graph.station_count(), 91);

        // 36 + 32 + 20 + 16 adjacent pairs in both directions, plus
        // one transfer self-loop per declared interchange pair
        let ride_edges = 2 * (36 + 32 + 20 + 16);
        assert_eq!(graph.edge_count(), ride_edges + 7);
    }

    #[test]
    fn ride_edges_are_symmetric_across_the_network() {
        let graph = RailGraph::build(&mumbai(), GraphConfig::default()).unwrap();
        for station in graph.stations() {
            for edge in graph.edges_from(&station.code) {
                if edge.is_transfer() {
                    continue;
                }
                let back = graph.edges_from(&edge.to).iter().any(|e| {
                    e.to == station.code && e.kind == edge.kind && e.duration == edge.duration
                });
                assert!(back, "no matching edge back from {} to {}", edge.to, station.code);
            }
        }
    }

    #[test]
    fn declared_interchange_lines_serve_their_station() {
        let model = mumbai();
        let map = model.station_map();
        for interchange in &model.interchanges {
            let station = map[&interchange.station];
            for line in &interchange.lines {
                assert!(
                    station.serves(line),
                    "{} does not list {line}",
                    station.code
                );
            }
        }
    }
}
