//! Common test fixtures for imagery broker tests.
//!
//! Identifiers and scene-list rows mirror what the public Landsat and
//! Sentinel-2 buckets publish.

/// Scene identifiers for each naming convention.
pub mod scene_ids {
    /// Pre-Collection-1 Landsat 8 ID (path 006, row 052)
    pub const LEGACY_LANDSAT: &str = "LC80060522017107LGN00";

    /// Legacy prefix with a corrupt body
    pub const MALFORMED_LEGACY_LANDSAT: &str = "LC8ABC";

    /// Collection-1 Landsat 8 ID present in [`super::scene_list::SAMPLE_CSV`]
    pub const COLLECTION_ONE: &str = "LC08_L1TP_012029_20170213_20170415_01_T1";

    /// Collection-1 Landsat 8 ID absent from the sample scene list
    pub const MISSING_COLLECTION_ONE: &str = "LC08_L1TP_012029_20180213_20170415_01_T1";

    /// Sentinel-2 ID in tile 11SKD
    pub const SENTINEL_2: &str = "S2A_MSIL1C_20160513T183921_N0204_R070_T11SKD_20160513T185132";

    /// Sentinel-2 ID acquired on 2017-02-05 (single-digit month and day)
    pub const SENTINEL_2_EARLY_MONTH: &str =
        "S2B_MSIL1C_20170205T091111_N0204_R050_T35TLF_20170205T091110";

    /// Sentinel prefix with a corrupt body
    pub const MALFORMED_SENTINEL_2: &str = "S2A_ABCDEF";

    /// No recognizable prefix
    pub const UNRECOGNIZED: &str = "X_NOT_LANDSAT_X";

    /// More real Sentinel-2 IDs
    pub const SENTINEL_2_EXAMPLES: [&str; 7] = [
        "S2A_MSIL1C_20161208T184752_N0204_R070_T11SKC_20161208T184750",
        "S2A_MSIL1C_20151005T185006_N0204_R070_T10SGH_20161214T094840",
        "S2A_MSIL1C_20151005T185006_N0204_R070_T11SKC_20161214T094840",
        "S2A_MSIL1C_20161221T185802_N0204_R113_T11SKC_20161221T185803",
        "S2A_MSIL1C_20161221T185802_N0204_R113_T10SGH_20161221T185803",
        "S2A_MSIL1C_20170107T184741_N0204_R070_T10SGH_20170107T184740",
        "S2A_MSIL1C_20170107T184741_N0204_R070_T11SKC_20170107T184740",
    ];
}

/// Scene-list payloads (decompressed form).
pub mod scene_list {
    /// File prefix of the sample row
    pub const SAMPLE_PREFIX: &str = "LC81490392017101LGN00";

    /// Folder the sample row resolves to
    pub const SAMPLE_FOLDER: &str = "https://s3-us-west-2.fakeamazonaws.dummy/thisiscorrect/";

    /// Header line for the rows below.
    ///
    /// Column 0 holds the entity-style ID, which doubles as the band file
    /// prefix; column 1 holds the Collection-1 product ID used as the lookup
    /// key. Only the trailing `download_url` marks the line as a header.
    pub const HEADER: &str = "entityId,productId,acquisitionDate,cloudCover,processingLevel,path,row,min_lat,min_lon,max_lat,max_lon,download_url";

    /// One data row: prefix, scene ID, middle fields, index URL.
    pub const SAMPLE_ROW: &str = "LC81490392017101LGN00,LC08_L1TP_012029_20170213_20170415_01_T1,2017-04-11 05:36:29.349932,0.0,L1TP,149,39,29.22165,72.41205,31.34742,74.84666,https://s3-us-west-2.fakeamazonaws.dummy/thisiscorrect/index.html";

    /// A second, unrelated data row.
    pub const SECOND_ROW: &str = "LC80060522017107LGN00,LC08_L1TP_006052_20170417_20170501_01_T1,2017-04-17 15:00:00.000000,12.5,L1TP,6,52,0.1,0.2,0.3,0.4,https://s3-us-west-2.fakeamazonaws.dummy/L8/006/052/other/index.html";

    /// A row whose last column has no directory component.
    pub const BAD_URL_ROW: &str = "LC8BROKEN,LC08_L1TP_999999_20170101_20170101_01_T1,2017-01-01 00:00:00,0.0,L1TP,1,1,0,0,0,0,index.html";

    /// The single-row scene list used throughout the catalog tests.
    pub const SAMPLE_CSV: &str = "LC81490392017101LGN00,LC08_L1TP_012029_20170213_20170415_01_T1,2017-04-11 05:36:29.349932,0.0,L1TP,149,39,29.22165,72.41205,31.34742,74.84666,https://s3-us-west-2.fakeamazonaws.dummy/thisiscorrect/index.html\n";
}

/// Common acquisition dates.
pub mod time {
    /// Fixed "now" for scoring tests
    pub const NOW: &str = "2017-06-01T00:00:00Z";

    /// A recent acquisition relative to [`NOW`]
    pub const RECENT: &str = "2017-05-01T10:30:00Z";

    /// Acquired before the 2015 archive cutoff
    pub const PRE_2015: &str = "2014-06-01T10:30:00Z";

    /// Not a date at all
    pub const UNPARSEABLE: &str = "yesterday-ish";
}
