//! Region table for Rajasthan.

use super::{Catalog, LatLng, Region, Tradition};
use crate::theme::ThemeToken;

pub(super) static RAJASTHAN: Catalog = Catalog {
    title: "Mhara Sangeet",
    area_name: "Rajasthan",
    search_context: "Rajasthani",
    placeholder_heading: "Mhara Sangeet: Digital Artifacts",
    center: LatLng::new(26.9124, 75.7873),
    regions: REGIONS,
};

const REGIONS: &[Region] = &[
    Region {
        id: 1,
        display_name: "Jaipur (East-Central)",
        color_token: ThemeToken::Pink,
        location: LatLng::new(26.9124, 75.7873),
        traditions: &[Tradition {
            name: "Maand",
            description: "Maand is Rajasthan’s signature semi-classical vocal tradition, popular in Jaipur and spread by royal patronage. Known for melodious, intricate compositions sung in praise of kings or the beauty of Rajasthan, often accompanied by harmonium, sarangi, tabla, and dholak.",
            famous_artists: &["Allah Jilai Bai", "Gauri Devi", "Prem Damami"],
            example_song: "Kesariya Balam",
            media_reference_id: None,
        }],
    },
    Region {
        id: 2,
        display_name: "Jodhpur (Marwar)",
        color_token: ThemeToken::Purple,
        location: LatLng::new(26.2389, 73.0243),
        traditions: &[
            Tradition {
                name: "Langa Sarangi Vadan & Dhol",
                description: "The Langa community, centered in Jodhpur, are legendary sarangi players and vocalists. Their lively music is integral to Rajasthani weddings and harvest festivals, typically accompanied by dhol and harmonium.",
                famous_artists: &["Dare Khan Langa", "Ghewar Khan"],
                example_song: "Kesariya Balam (Langa rendition)",
                media_reference_id: None,
            },
            Tradition {
                name: "Manganiyar Lok Gayaki",
                description: "Manganiyars are hereditary bards performing epic ballads, devotional works, and romantic songs for Rajput patrons, using kamaicha, dholak, and harmonium.",
                famous_artists: &["Anwar Khan Manganiyar", "Mame Khan"],
                example_song: "Nimbooda Nimbooda",
                media_reference_id: None,
            },
        ],
    },
    Region {
        id: 3,
        display_name: "Udaipur (Mewar)",
        color_token: ThemeToken::Teal,
        location: LatLng::new(24.5854, 73.7125),
        traditions: &[
            Tradition {
                name: "Kalbelia Dance Music",
                description: "Kalbelia dance and music, performed by the snake-charmer Kalbelia community, is noted for fast-paced rhythms, high-energy singing, and skilled pungi and dholak playing.",
                famous_artists: &["Gulabo Sapera", "Kalbelia collectives"],
                example_song: "Udja Kale Kawa",
                media_reference_id: None,
            },
            Tradition {
                name: "Panihari",
                description: "Panihari songs, prominent in Mewar, narrate the life and emotions of women fetching water, set to gentle melodies and soulful lyrics.",
                famous_artists: &["Local Panihari singers"],
                example_song: "Panihari Geet",
                media_reference_id: None,
            },
        ],
    },
    Region {
        id: 4,
        display_name: "Ajmer (Central)",
        color_token: ThemeToken::Indigo,
        location: LatLng::new(26.4499, 74.6399),
        traditions: &[Tradition {
            name: "Ajmer Sufi Qawwali",
            description: "Qawwali singing at Ajmer Sharif combines deep Sufi lyrics in Hindi, Persian, and Urdu with tabla and harmonium, creating ecstatic devotional soundscapes.",
            famous_artists: &["Warsis Brothers", "Ajmer Dargah Qawwals"],
            example_song: "Bhar Do Jholi Meri Ya Mohammad",
            media_reference_id: None,
        }],
    },
    Region {
        id: 5,
        display_name: "Bikaner (Northwest)",
        color_token: ThemeToken::Cyan,
        location: LatLng::new(28.0229, 73.3119),
        traditions: &[Tradition {
            name: "Pabuji Ki Phach",
            description: "This oral epic tradition tells the tale of the folk hero Pabuji, narrated through song and giant phads (painted canvas backdrops).",
            famous_artists: &["Phad artists of Bikaner"],
            example_song: "Pabuji Ka Parichay",
            media_reference_id: None,
        }],
    },
    Region {
        id: 6,
        display_name: "Kota (Hadoti)",
        color_token: ThemeToken::Green,
        location: LatLng::new(25.2138, 75.8648),
        traditions: &[Tradition {
            name: "Charbait (Hadoti region)",
            description: "Charbait features robust oral poetry in quatrain form on romantic, historical, or devotional themes. It is performed with voice modulation and duffs/drums.",
            famous_artists: &["Local Charbait poets", "Awwal Baabu"],
            example_song: "Qawwali (Hadoti region)",
            media_reference_id: None,
        }],
    },
    Region {
        id: 7,
        display_name: "Alwar (Northeast)",
        color_token: ThemeToken::Amber,
        location: LatLng::new(27.55299, 76.6346),
        traditions: &[Tradition {
            name: "Bhapang Mewati",
            description: "The Bhapang is a rare single-string percussion instrument essential in Alwar’s folk music, accompanying bhajans, Marwari songs, and local poetry.",
            famous_artists: &["Jogi Community performers"],
            example_song: "Alwar Bhapang Bhajan",
            media_reference_id: None,
        }],
    },
    Region {
        id: 8,
        display_name: "Sikar (Shekhawati)",
        color_token: ThemeToken::Lime,
        location: LatLng::new(27.6094, 75.1399),
        traditions: &[Tradition {
            name: "Ghoomar",
            description: "Shekhawati’s iconic dance-singing style, originally of the Bhil tribe, now a popular women’s folk dance with swirling ghaghara dresses and spirited choruses.",
            famous_artists: &["Local dance groups"],
            example_song: "Shekhawati Ghoomar Geet",
            media_reference_id: None,
        }],
    },
    Region {
        id: 9,
        display_name: "Bhilwara (Central-South)",
        color_token: ThemeToken::Red,
        location: LatLng::new(25.3460, 74.6359),
        traditions: &[Tradition {
            name: "Terah Taali",
            description: "Tribal Terah Taali features dancers with thirteen small manjira (metal cymbals) performing ceremonial dances, accompanied by devotional bhajans and dholak.",
            famous_artists: &["Meena and Bhil artists"],
            example_song: "Terah Taali Bhilwara",
            media_reference_id: None,
        }],
    },
    Region {
        id: 10,
        display_name: "Bharatpur (Eastern/Braj)",
        color_token: ThemeToken::Blue,
        location: LatLng::new(27.2173, 77.4895),
        traditions: &[Tradition {
            name: "Braj Lok Sangeet",
            description: "Traditional Braj folk songs for Holi and festivals, with expressive vocals and dhol, harmonium accompaniment.",
            famous_artists: &["Local Braj singers"],
            example_song: "Braj Ki Holi Geet",
            media_reference_id: None,
        }],
    },
    Region {
        id: 11,
        display_name: "Jaisalmer (Desert-West)",
        color_token: ThemeToken::Yellow,
        location: LatLng::new(26.9157, 70.9084),
        traditions: &[
            Tradition {
                name: "Manganiyar Desert Song",
                description: "Jaisalmer’s Manganiyars are famed hereditary bards who narrate desert epics, spirituals, and family histories through soulful vocals and ancient instruments, especially kamaicha, khartal, and dholak.",
                famous_artists: &["Gazi Khan Barna", "Sakar Khan", "Talab Khan"],
                example_song: "Chhedta Surang",
                media_reference_id: None,
            },
            Tradition {
                name: "Langa Songs",
                description: "Langas, also centering in Jaisalmer, are masters of sindhi sarangi and algoza, performing songs of love, nature, and war for royal patrons and local events.",
                famous_artists: &["Ghewar Khan Langa", "Ganga Devi Langa"],
                example_song: "Mumal Kevda",
                media_reference_id: None,
            },
            Tradition {
                name: "Desert Ballads (Haalariya, Ghooghri)",
                description: "Unique birth and ritual celebration songs like Haalariya and Ghooghri, as well as bhajans and shringar ras songs for solitude and daily desert life.",
                famous_artists: &["Local Bhopa, Manganiyar troupes"],
                example_song: "Haalariya (Jaisalmer region)",
                media_reference_id: None,
            },
        ],
    },
];
