use lazy_static::lazy_static;

use crate::normalize::contains_term;

lazy_static! {
    /// Metro clusters: locations inside one cluster are treated as commutable.
    pub static ref METRO_CLUSTERS: Vec<Vec<&'static str>> = vec![
        // Mumbai Metropolitan Region
        vec![
            "mumbai", "bombay", "navi mumbai", "thane", "vashi", "panvel", "kalyan",
            "dombivli", "bhiwandi", "andheri", "powai", "borivali", "mira road",
            "vasai", "virar", "belapur", "kharghar", "airoli", "taloja",
        ],
        // Delhi NCR
        vec![
            "delhi", "new delhi", "ncr", "gurgaon", "gurugram", "noida",
            "greater noida", "ghaziabad", "faridabad", "manesar", "dwarka", "sonipat",
            "bahadurgarh",
        ],
        // Bengaluru
        vec![
            "bangalore", "bengaluru", "whitefield", "electronic city", "hosur",
            "yelahanka", "hebbal", "koramangala", "marathahalli", "nelamangala",
        ],
        // Pune
        vec![
            "pune", "pimpri", "chinchwad", "pimpri-chinchwad", "hinjewadi", "chakan",
            "talegaon", "hadapsar", "wakad", "ranjangaon",
        ],
        // Chennai
        vec![
            "chennai", "madras", "sriperumbudur", "ambattur", "guindy", "tambaram",
            "oragadam", "porur", "ennore",
        ],
        // Hyderabad
        vec![
            "hyderabad", "secunderabad", "gachibowli", "hitech city", "cyberabad",
            "shamshabad", "madhapur", "medchal",
        ],
        // Kolkata
        vec![
            "kolkata", "calcutta", "howrah", "salt lake", "new town", "rajarhat",
            "dankuni",
        ],
        // Ahmedabad - Gandhinagar
        vec!["ahmedabad", "gandhinagar", "sanand", "changodar", "bavla"],
    ];

    /// Location names recognised in queries, checked in this order. More
    /// specific names come before the names they contain.
    pub static ref LOCATION_GAZETTEER: Vec<&'static str> = vec![
        "navi mumbai", "mumbai", "bombay", "thane", "bhiwandi", "panvel",
        "new delhi", "greater noida", "noida", "gurugram", "gurgaon", "delhi", "ncr",
        "ghaziabad", "faridabad", "manesar",
        "bengaluru", "bangalore", "hosur",
        "pimpri-chinchwad", "pune", "chakan",
        "chennai", "sriperumbudur",
        "secunderabad", "hyderabad",
        "kolkata", "howrah",
        "ahmedabad", "gandhinagar",
        "jaipur", "lucknow", "indore", "nagpur", "surat", "vadodara", "coimbatore",
        "kochi", "chandigarh", "bhopal", "patna", "ludhiana", "nashik",
        "visakhapatnam", "guwahati", "bhubaneswar", "raipur", "ranchi",
    ];
}

/// Indices of every cluster with a member named as a whole word in
/// `location`. Expects the normalized form.
pub fn clusters_mentioning(location: &str) -> impl Iterator<Item = usize> + '_ {
    METRO_CLUSTERS
        .iter()
        .enumerate()
        .filter(move |(_, members)| {
            members
                .iter()
                .any(|member| contains_term(location, member))
        })
        .map(|(index, _)| index)
}
