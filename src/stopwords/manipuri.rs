//! Curated Manipuri (Meetei Mayek) stopwords.

pub const WORDS: &[&str] = &[
    "ꯑꯗꯨ", "ꯑꯁꯤ", "ꯑꯗꯣꯝ", "ꯑꯗꯣꯝꯒꯤ", "ꯑꯗꯣꯝꯒꯤꯗꯝꯛ", "ꯑꯗꯣꯝꯁꯨ", "ꯑꯗꯣꯝꯅ", "ꯑꯗꯣꯝꯅꯁꯨ", "ꯑꯗꯣꯝꯗ",
    "ꯑꯗꯣꯝꯗꯁꯨ", "ꯑꯗꯣꯝꯗꯒꯤ", "ꯑꯗꯣꯝꯗꯒꯤꯁꯨ", "ꯑꯗꯣꯝꯗꯤ", "ꯑꯗꯣꯝꯗꯨ", "ꯑꯗꯣꯝꯅꯗꯤ", "ꯑꯗꯣꯝꯅꯗꯨ", "ꯑꯗꯣꯝꯅꯥ",
    "ꯑꯗꯣꯝꯅꯥꯁꯨ", "ꯑꯗꯣꯝꯅꯥꯗꯤ", "ꯑꯗꯣꯝꯅꯥꯗꯨ", "ꯑꯗꯣꯝꯁꯤ", "ꯑꯗꯨꯒ", "ꯑꯗꯨꯒꯤ", "ꯑꯗꯨꯒꯨꯝ", "ꯑꯗꯨꯒꯨꯝꯕ",
    "ꯑꯗꯨꯒꯨꯝꯕꯗ", "ꯑꯗꯨꯒꯨꯝꯕꯗꯨ", "ꯑꯗꯨꯒꯨꯝꯕꯅ", "ꯑꯗꯨꯒꯨꯝꯕꯅꯗꯤ", "ꯑꯗꯨꯒꯨꯝꯕꯅꯗꯨ", "ꯑꯗꯨꯒꯨꯝꯕꯁꯤ",
    "ꯑꯗꯨꯒꯨꯝꯕꯁꯨ", "ꯑꯗꯨꯗ", "ꯑꯗꯨꯗꯁꯨ", "ꯑꯗꯨꯗꯒꯤ", "ꯑꯗꯨꯗꯒꯤꯁꯨ", "ꯑꯗꯨꯗꯤ", "ꯑꯗꯨꯗꯨ", "ꯑꯗꯨꯅ",
    "ꯑꯗꯨꯅꯁꯨ", "ꯑꯗꯨꯅꯗꯤ", "ꯑꯗꯨꯅꯗꯨ", "ꯑꯗꯨꯁꯤ", "ꯑꯗꯨꯁꯨ", "ꯑꯗꯧ", "ꯑꯗꯧꯅ", "ꯑꯅꯤ", "ꯑꯄꯨꯡꯕ", "ꯑꯃ",
    "ꯑꯃꯁꯨꯡ", "ꯑꯃꯠꯇ", "ꯑꯃꯠꯇꯁꯨ", "ꯑꯃꯠꯇꯗ", "ꯑꯃꯠꯇꯗꯁꯨ", "ꯑꯃꯠꯇꯅ", "ꯑꯃꯠꯇꯅꯁꯨ", "ꯑꯃꯗꯤ", "ꯑꯃꯥꯡꯕ",
    "ꯑꯃꯨꯛ", "ꯑꯃꯨꯛꯄꯨ", "ꯑꯃꯨꯛꯁꯨ", "ꯑꯃꯨꯛꯍꯟꯅ", "ꯑꯃꯣꯝ", "ꯑꯃꯣꯠ", "ꯑꯃꯣꯠꯇ", "ꯑꯃꯣꯠꯇꯁꯨ", "ꯑꯃꯣꯠꯇꯗ",
    "ꯑꯃꯣꯠꯇꯗꯁꯨ", "ꯑꯃꯣꯠꯇꯅ", "ꯑꯃꯣꯠꯇꯅꯁꯨ", "ꯑꯩ", "ꯑꯩꯒꯤ", "ꯑꯩꯒꯤꯗꯝꯛ", "ꯑꯩꯒꯤꯁꯨ", "ꯑꯩꯒꯨꯝꯕ",
    "ꯑꯩꯒꯨꯝꯕꯗ", "ꯑꯩꯒꯨꯝꯕꯗꯨ", "ꯑꯩꯒꯨꯝꯕꯅ", "ꯑꯩꯒꯨꯝꯕꯅꯗꯤ", "ꯑꯩꯒꯨꯝꯕꯅꯗꯨ", "ꯑꯩꯒꯨꯝꯕꯁꯤ", "ꯑꯩꯒꯨꯝꯕꯁꯨ",
    "ꯑꯩꯁꯨ", "ꯑꯩꯅ", "ꯑꯩꯅꯁꯨ", "ꯑꯩꯅꯗꯤ", "ꯑꯩꯅꯗꯨ", "ꯑꯩꯅꯥ", "ꯑꯩꯅꯥꯁꯨ", "ꯑꯩꯅꯥꯗꯤ", "ꯑꯩꯅꯥꯗꯨ",
    "ꯑꯩꯁꯤ", "ꯑꯔꯦꯝꯕ", "ꯑꯔꯦꯝꯕꯗ", "ꯑꯔꯦꯝꯕꯗꯨ", "ꯑꯔꯦꯝꯕꯅ", "ꯑꯔꯦꯝꯕꯅꯗꯤ", "ꯑꯔꯦꯝꯕꯅꯗꯨ", "ꯑꯔꯦꯝꯕꯁꯤ",
    "ꯑꯔꯦꯝꯕꯁꯨ", "ꯑꯍꯥꯟꯕ", "ꯑꯍꯥꯟꯕꯗ", "ꯑꯍꯥꯟꯕꯗꯨ", "ꯑꯍꯥꯟꯕꯅ", "ꯑꯍꯥꯟꯕꯅꯗꯤ", "ꯑꯍꯥꯟꯕꯅꯗꯨ", "ꯑꯍꯥꯟꯕꯁꯤ",
    "ꯑꯍꯥꯟꯕꯁꯨ", "ꯑꯍꯧꯕ", "ꯑꯍꯧꯕꯗ", "ꯑꯍꯧꯕꯗꯨ", "ꯑꯍꯧꯕꯅ", "ꯑꯍꯧꯕꯅꯗꯤ", "ꯑꯍꯧꯕꯅꯗꯨ", "ꯑꯍꯧꯕꯁꯤ",
    "ꯑꯍꯧꯕꯁꯨ", "ꯑꯍꯨꯝ", "ꯑꯍꯨꯝꯁꯨꯕ", "ꯑꯩꯍꯥꯛ", "ꯑꯩꯍꯥꯛꯀꯤ", "ꯑꯩꯍꯥꯛꯀꯤꯗꯝꯛ", "ꯑꯩꯍꯥꯛꯀꯤꯁꯨ", "ꯑꯩꯍꯥꯛꯁꯨ",
    "ꯑꯩꯍꯥꯛꯅ", "ꯑꯩꯍꯥꯛꯅꯁꯨ", "ꯑꯩꯍꯥꯛꯅꯗꯤ", "ꯑꯩꯍꯥꯛꯅꯗꯨ", "ꯑꯩꯍꯥꯛꯅꯥ", "ꯑꯩꯍꯥꯛꯅꯥꯁꯨ", "ꯑꯩꯍꯥꯛꯅꯥꯗꯤ",
    "ꯑꯩꯍꯥꯛꯅꯥꯗꯨ", "ꯑꯩꯍꯥꯛꯁꯤ", "ꯑꯩꯖꯣꯡ", "ꯑꯩꯖꯣꯡꯒꯤ", "ꯑꯩꯖꯣꯡꯒꯤꯗꯝꯛ", "ꯑꯩꯖꯣꯡꯒꯤꯁꯨ", "ꯑꯩꯖꯣꯡꯁꯨ",
    "ꯑꯩꯖꯣꯡꯅ", "ꯑꯩꯖꯣꯡꯅꯁꯨ", "ꯑꯩꯖꯣꯡꯅꯗꯤ", "ꯑꯩꯖꯣꯡꯅꯗꯨ", "ꯑꯩꯖꯣꯡꯅꯥ", "ꯑꯩꯖꯣꯡꯅꯥꯁꯨ", "ꯑꯩꯖꯣꯡꯅꯥꯗꯤ",
    "ꯑꯩꯖꯣꯡꯅꯥꯗꯨ", "ꯑꯩꯖꯣꯡꯁꯤ", "ꯑꯩꯇꯥ", "ꯑꯩꯇꯥꯗ", "ꯑꯩꯇꯥꯗꯁꯨ", "ꯑꯩꯇꯥꯗꯒꯤ", "ꯑꯩꯇꯥꯗꯒꯤꯁꯨ", "ꯑꯩꯇꯥꯗꯤ",
    "ꯑꯩꯇꯥꯗꯨ", "ꯑꯩꯇꯥꯅ", "ꯑꯩꯇꯥꯅꯁꯨ", "ꯑꯩꯇꯥꯅꯗꯤ", "ꯑꯩꯇꯥꯅꯗꯨ", "ꯑꯩꯇꯥꯁꯤ", "ꯑꯩꯇꯥꯁꯨ", "ꯑꯩꯊꯧ",
    "ꯑꯩꯊꯧꯗ", "ꯑꯩꯊꯧꯗꯁꯨ", "ꯑꯩꯊꯧꯗꯒꯤ", "ꯑꯩꯊꯧꯗꯒꯤꯁꯨ", "ꯑꯩꯊꯧꯗꯤ", "ꯑꯩꯊꯧꯗꯨ", "ꯑꯩꯊꯧꯅ", "ꯑꯩꯊꯧꯅꯁꯨ",
    "ꯑꯩꯊꯧꯅꯗꯤ", "ꯑꯩꯊꯧꯅꯗꯨ", "ꯑꯩꯊꯧꯁꯤ", "ꯑꯩꯊꯧꯁꯨ", "ꯑꯁꯤꯒ", "ꯑꯁꯤꯒꯤ", "ꯑꯁꯤꯒꯨꯝ", "ꯑꯁꯤꯒꯨꯝꯕ",
    "ꯑꯁꯤꯒꯨꯝꯕꯗ", "ꯑꯁꯤꯒꯨꯝꯕꯗꯨ", "ꯑꯁꯤꯒꯨꯝꯕꯅ", "ꯑꯁꯤꯒꯨꯝꯕꯅꯗꯤ", "ꯑꯁꯤꯒꯨꯝꯕꯅꯗꯨ", "ꯑꯁꯤꯒꯨꯝꯕꯁꯤ",
    "ꯑꯁꯤꯒꯨꯝꯕꯁꯨ", "ꯑꯁꯤꯗ", "ꯑꯁꯤꯗꯁꯨ", "ꯑꯁꯤꯗꯒꯤ", "ꯑꯁꯤꯗꯒꯤꯁꯨ", "ꯑꯁꯤꯗꯤ", "ꯑꯁꯤꯗꯨ", "ꯑꯁꯤꯅ",
    "ꯑꯁꯤꯅꯁꯨ", "ꯑꯁꯤꯅꯗꯤ", "ꯑꯁꯤꯅꯗꯨ", "ꯑꯁꯤꯁꯤ", "ꯑꯁꯤꯁꯨ", "ꯑꯁꯧꯕ", "ꯑꯁꯧꯕꯗ", "ꯑꯁꯧꯕꯗꯨ", "ꯑꯁꯧꯕꯅ",
    "ꯑꯁꯧꯕꯅꯗꯤ", "ꯑꯁꯧꯕꯅꯗꯨ", "ꯑꯁꯧꯕꯁꯤ", "ꯑꯁꯧꯕꯁꯨ", "ꯑꯇꯩ", "ꯑꯇꯩꯗ", "ꯑꯇꯩꯗꯁꯨ", "ꯑꯇꯩꯗꯒꯤ",
    "ꯑꯇꯩꯗꯒꯤꯁꯨ", "ꯑꯇꯩꯗꯤ", "ꯑꯇꯩꯗꯨ", "ꯑꯇꯩꯅ", "ꯑꯇꯩꯅꯁꯨ", "ꯑꯇꯩꯅꯗꯤ", "ꯑꯇꯩꯅꯗꯨ", "ꯑꯇꯩꯁꯤ", "ꯑꯇꯩꯁꯨ",
    "ꯑꯋꯥꯡꯕ", "ꯑꯋꯥꯡꯕꯗ", "ꯑꯋꯥꯡꯕꯗꯨ", "ꯑꯋꯥꯡꯕꯅ", "ꯑꯋꯥꯡꯕꯅꯗꯤ", "ꯑꯋꯥꯡꯕꯅꯗꯨ", "ꯑꯋꯥꯡꯕꯁꯤ", "ꯑꯋꯥꯡꯕꯁꯨ",
    "ꯑꯌꯥꯝꯕ", "ꯑꯌꯥꯝꯕꯗ", "ꯑꯌꯥꯝꯕꯗꯨ", "ꯑꯌꯥꯝꯕꯅ", "ꯑꯌꯥꯝꯕꯅꯗꯤ", "ꯑꯌꯥꯝꯕꯅꯗꯨ", "ꯑꯌꯥꯝꯕꯁꯤ", "ꯑꯌꯥꯝꯕꯁꯨ",
    "ꯑꯌꯨꯛ", "ꯑꯌꯨꯛꯇ", "ꯑꯌꯨꯛꯇꯁꯨ", "ꯑꯌꯨꯛꯇꯒꯤ", "ꯑꯌꯨꯛꯇꯒꯤꯁꯨ", "ꯑꯌꯨꯛꯇꯤ", "ꯑꯌꯨꯛꯇꯨ", "ꯑꯌꯨꯛꯀꯤ",
    "ꯑꯌꯨꯛꯀꯤꯁꯨ", "ꯑꯌꯨꯛꯅ", "ꯑꯌꯨꯛꯅꯁꯨ", "ꯑꯌꯨꯛꯅꯗꯤ", "ꯑꯌꯨꯛꯅꯗꯨ", "ꯑꯌꯨꯛꯁꯤ", "ꯑꯌꯨꯛꯁꯨ", "ꯑꯔꯤꯕ",
    "ꯑꯔꯤꯕꯗ", "ꯑꯔꯤꯕꯗꯨ", "ꯑꯔꯤꯕꯅ", "ꯑꯔꯤꯕꯅꯗꯤ", "ꯑꯔꯤꯕꯅꯗꯨ", "ꯑꯔꯤꯕꯁꯤ", "ꯑꯔꯤꯕꯁꯨ",
];
