use serde::Serialize;

/// One exported dataset row. Built once per player after every page for that
/// player has been fetched; never mutated afterward. Field order matches the
/// CSV header consumed downstream.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub ncaa_fg3a: i64,
    pub ncaa_fg3_pct: f64,
    pub ncaa_ft_pct: f64,
    pub ncaa_sos: f64,
    pub ncaa_team_fg3a_avg: f64,
    pub nba_avg_team_ortg: f64,
    pub nba_relative_team_fg3a: f64,
    pub nba_fg3_pct: f64,
}

/// Every player whose data gets extracted, in export order.
pub const ROSTER: &[&str] = &[
    "James Harden", "Stephen Curry", "DeMar DeRozan", "Jonny Flynn", "Earl Clark", "James Johnson",
    "Gerald Henderson", "Jeff Teague", "Tyreke Evans", "Wayne Ellington", "Eric Maynor", "Chase Budinger",
    "Ty Lawson", "Darren Collison", "Toney Douglas", "Jrue Holiday", "Patty Mills", "Marcus Thornton",
    "Austin Daye", "Danny Green", "DeMarre Carroll", "Wesley Matthews", "Jodie Meeks", "AJ Price", "Alonzo Gee",
    "John Wall", "Evan Turner", "Wesley Johnson", "Patrick Patterson", "Luke Babbitt", "Al-Farouq Aminu",
    "Paul George", "Avery Bradley", "Gordon Hayward", "James Anderson", "Eric Bledsoe", "Lance Stephenson",
    "Quincy Pondexter", "Jordan Crawford", "Greivis Vasquez", "Derrick Williams", "Kyrie Irving", "Brandon Knight",
    "Jimmer Fredette", "Alec Burks", "Klay Thompson", "Kemba Walker", "Kawhi Leonard", "Marcus Morris",
    "Markieff Morris", "Jordan Hamilton", "Tobias Harris", "Norris Cole", "Kyle Singler", "Shelvin Mack",
    "Reggie Jackson", "Chandler Parsons", "Jon Leuer", "Cory Joseph", "Iman Shumpert", "Jimmy Butler",
    "E'Twaun Moore", "Harrison Barnes", "Bradley Beal", "Jeremy Lamb", "Damian Lillard", "Terrence Ross",
    "Austin Rivers", "Kendall Marshall", "Maurice Harkless", "Andrew Nicholson", "Dion Waiters",
    "Jared Sullinger", "Terrence Jones", "John Jenkins", "Will Barton", "Khris Middleton", "Tony Wroten",
    "Jeffery Taylor", "Draymond Green", "Mike Scott", "Hollis Thompson", "Chris Johnson", "Jae Crowder",
    "Ben McLemore", "CJ McCollum", "Victor Oladipo", "Otto Porter", "Trey Burke", "Kentavious Caldwell-Pope",
    "Michael Carter-Williams", "Tim Hardaway Jr.", "Shabazz Muhammad", "Kelly Olynyk", "Tony Snell",
    "Shane Larkin", "Allen Crabbe", "Isaiah Canaan", "Reggie Bullock", "James Ennis", "Robert Covington",
    "Ryan Kelly", "Andre Roberson", "Solomon Hill", "Seth Curry", "Andrew Wiggins", "Marcus Smart",
    "Zach LaVine", "Elfrid Payton", "Doug McDermott", "Aaron Gordon", "Gary Harris", "Rodney Hood",
    "Nik Stauskas", "Jordan Clarkson", "Shabazz Napier", "PJ Hairston", "D'Angelo Russell", "Justise Winslow",
    "Stanley Johnson", "Trey Lyles", "Cameron Payne", "Myles Turner", "Devin Booker", "Sam Dekker",
    "Bobby Portis", "Kelly Oubre", "Terry Rozier", "Rashad Vaughn", "Jerian Grant", "Justin Anderson",
    "Frank Kaminsky", "Norman Powell", "Richaun Holmes", "Josh Richardson", "Andrew Harrison",
    "Pat Connaughton", "TJ McConnell", "Brandon Ingram", "Jaylen Brown", "Buddy Hield", "Marquese Chriss",
    "Domantas Sabonis", "Jamal Murray", "Caris LeVert", "Patrick McCaw", "Taurean Prince",
    "Malcolm Brogdon", "Yogi Ferrell",
];
