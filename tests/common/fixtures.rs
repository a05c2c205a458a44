use torrust_tracker_primitives::info_hash::InfoHash;

/// Raw `info_hash` param values that do not decode into 20 bytes.
pub fn invalid_info_hashes() -> Vec<String> {
    [
        "0".to_string(),
        "-1".to_string(),
        "1.1".to_string(),
        "INVALID INFOHASH".to_string(),
        "9c38422213e30bff212b30c360d26f9a0213642".to_string(), // 39-char length instead of 40
        "9c38422213e30bff212b30c360d26f9a0213642&".to_string(), // Invalid char
    ]
    .to_vec()
}

pub fn sample_info_hash() -> InfoHash {
    "9c38422213e30bff212b30c360d26f9a02136422".parse::<InfoHash>().unwrap()
}

pub fn another_info_hash() -> InfoHash {
    "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse::<InfoHash>().unwrap()
}
