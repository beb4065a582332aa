//! Standings bodies and the lines they must produce

/// Single team, as served by a typical standings endpoint
pub const SINGLE_TEAM: &str = r#"[{"TeamName":"Foo","DivName":"East","Wins":10,"Losses":5,"Ties":2,"GamesPlayed":17,"Points":22,"GF":50,"GA":40,"PlusMinus":10}]"#;

/// Expected output for [`SINGLE_TEAM`]
pub const SINGLE_TEAM_OUTPUT: &str = "('Foo', 'East', 10, 5, 2, 17, 22, 50, 40, 10),\n";

/// Full division table with extra keys the decoder must ignore
pub const DIVISION_TABLE: &str = r#"[
  {"TeamId": 11, "TeamName": "Lakeside Otters", "DivName": "North", "Wins": 14, "Losses": 3, "Ties": 1,
   "GamesPlayed": 18, "Points": 29, "GF": 71, "GA": 38, "PlusMinus": 33},
  {"TeamId": 12, "TeamName": "Ridge Runners", "DivName": "North", "Wins": 9, "Losses": 8, "Ties": 1,
   "GamesPlayed": 18, "Points": 19, "GF": 52, "GA": 50, "PlusMinus": 2},
  {"TeamId": 13, "TeamName": "Harbour Seals", "DivName": "North", "Wins": 3, "Losses": 14, "Ties": 1,
   "GamesPlayed": 18, "Points": 7, "GF": 29, "GA": 64, "PlusMinus": -35}
]"#;

/// Expected output for [`DIVISION_TABLE`]
pub const DIVISION_TABLE_OUTPUT: &str = "\
('Lakeside Otters', 'North', 14, 3, 1, 18, 29, 71, 38, 33),
('Ridge Runners', 'North', 9, 8, 1, 18, 19, 52, 50, 2),
('Harbour Seals', 'North', 3, 14, 1, 18, 7, 29, 64, -35),
";

/// Second element lacks `GF`
pub const MISSING_FIELD: &str = r#"[
  {"TeamName":"Foo","DivName":"East","Wins":10,"Losses":5,"Ties":2,"GamesPlayed":17,"Points":22,"GF":50,"GA":40,"PlusMinus":10},
  {"TeamName":"Bar","DivName":"East","Wins":4,"Losses":11,"Ties":2,"GamesPlayed":17,"Points":10,"GA":61,"PlusMinus":-25}
]"#;

/// Root is an object rather than an array
pub const ROOT_OBJECT: &str = r#"{"standings":[]}"#;
