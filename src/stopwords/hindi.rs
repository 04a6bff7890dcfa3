//! Curated Hindi (Devanagari) stopwords.

pub const WORDS: &[&str] = &[
    "का", "के", "की", "है", "में", "से", "हैं", "को", "पर", "इस", "होता", "कि", "जो",
    "कर", "मे", "गया", "करने", "किया", "लिये", "अपने", "ने", "बनी", "नहीं", "तो", "ही",
    "या", "एवं", "दिया", "हो", "इसका", "था", "द्वारा", "हुआ", "तक", "साथ", "करता", "हुई",
    "एक", "और", "यह", "रहा", "हुए", "थे", "करें", "इसके", "थी", "उस", "हूँ", "जा", "ना",
    "उन", "वह", "भी", "वे", "जब", "होते", "कोई", "हम", "आप", "फिर", "बहुत", "कहा", "वाले",
    "जैसे", "सभी", "कुछ", "क्या", "अब", "उनके", "इसी", "रहे", "उनकी", "उनका", "अपनी",
    "उसके", "तथा", "दो", "वहां", "गये", "बड़े", "वर्ग", "तरह", "रही", "किसी", "ऐसे",
    "रखें", "अपना", "उसे", "जिसमें", "किन्हें", "रूप", "किन्होंने", "लेकिन", "कम", "होती",
    "अधिक", "वर्ष", "यदि", "हुये", "इसलिए", "रखा", "किये", "अन्य", "भाग", "उन्हें", "गयी",
    "प्रति", "कुल", "एस", "रहती", "इसमें", "जिस", "प्रकार", "आदि", "इन", "अभी", "आज",
    "कल", "जिन्हें", "जिन्होंने", "तब", "उसकी", "उसका", "यहाँ", "इसकी", "सकती", "इसे",
    "जिसके", "सबसे", "होने", "बात", "यही", "वही", "दिन", "कहते", "कई", "तरफ", "बाद",
    "लिए", "रख", "रखी", "उन्होंने", "वहीं", "उन्हीं", "जाता", "जाती", "बाहर", "आ", "आता",
    "आती", "वाला", "वाली", "हर", "जाए", "जाएगा", "जाएँगे", "जाओ", "आओ", "आएगा", "आएँगे",
    "वहाँ", "जहाँ", "वग़ैरह", "नीचे", "ऊपर", "सारे", "सारी", "अंदर", "माना", "मानी",
    "मानो", "अच्छा", "अच्छी", "अच्छे", "ले", "लो", "दे", "उसको", "उससे", "उसने", "उसमें",
    "उसी", "उनसे", "उनको", "उनमें",
];
