//! Curated Assamese (Bengali-Assamese script) stopwords.

pub const WORDS: &[&str] = &[
    "আৰু", "এই", "এটা", "এনে", "তাৰ", "নাই", "হয়", "হৈ", "হল", "হব", "কৰি", "কৰা", "কৰে",
    "কৰিব", "কৰিবা", "কৰিলে", "নকৰে", "নকৰা", "আছে", "আছিল", "থাকে", "থাকিব", "যায়",
    "যাব", "যাওক", "আহে", "আহিব", "আহিবা", "পাৰে", "পাৰিব", "লাগে", "লাগিব", "লাগিল",
    "হোৱা", "হোৱাৰ", "হোৱাই", "তেওঁ", "তেওঁৰ", "তেওঁক", "মই", "মোক", "মোৰ", "আমি", "আমাক",
    "আমাৰ", "তুমি", "তোমাক", "তোমাৰ", "তেওঁলোক", "তেওঁলোকৰ", "তেওঁলোকক", "কি", "কিয়",
    "কেনে", "কেনেকৈ", "য়াৰ", "কত", "কিমান", "কোন", "কোনে", "যি", "যিয়ে", "যাক", "যাৰ",
    "যিহেতু", "যিখিনি", "যিমান", "যিটো", "যিবোৰ", "যত", "যতবোৰ", "যথা", "যদি", "যদিও",
    "যদিহে", "যাতে", "যিহত", "সেই", "সেইটো", "সেইবোৰ", "তেনে", "তেনেকুৱা", "তেতিয়া",
    "তাত", "তাক", "তাই", "তিনি", "তিনিওটা", "তিনিটা", "সি", "সিহঁত", "সিহঁতৰ", "সিহঁতক",
    "বা", "বাৰু", "নতুবা", "তথাপি", "কিন্তু", "তেন্তে", "তেতিয়াহলে", "নাইবা", "নহলে",
    "নহয়", "নাইকিয়া", "নোহোৱা", "নোহোৱাকৈ", "নোহোৱালৈকে", "হে", "হয়তো", "হবলা", "হলে",
    "হলো", "হৈছে", "হৈছিল", "হোৱাত", "নহব", "নহল", "নহে", "নাছিল", "নিচিনা", "নিচিনে",
    "কৰক", "কৰিবলৈ", "কৰিবে", "কৰিম", "কৰিয়ে", "কৰিলেই", "কৰিলেও", "কৰিলোঁ", "কৰো",
    "কৰোঁ", "কৰোঁতে", "কৰোঁতেই", "নকৰিব", "নকৰিবা", "নকৰিলে", "নকৰো", "নকৰোঁ", "কৰাওক",
    "কৰাই", "কৰাইছে", "কৰাইছিল", "কৰাব", "কৰাবা", "কৰাবে", "কৰাম", "কৰালে", "কৰালেও",
    "কৰাৱ", "কৰিছিল", "কৰিছে", "কৰিছো", "কৰিছোঁ", "কৰিবই", "কৰিবি", "কৰিয়েই", "কৰোৱা",
    "কৰোৱাই", "কৰোৱাত", "কৰোৱাৰ", "এইখিনি", "এইজন", "এইটো", "এইবোৰ", "এইসকল", "এওঁ",
    "এওঁলোক", "এনেকুৱা", "এৰা", "এৰি", "ওপৰত", "ওলাই", "ওলোৱা", "কাৰণে", "কেতিয়া",
    "কেতিয়াবা", "কেৱল", "কোনো", "গৈ", "চাই", "চালে", "চোৱা", "ছয়", "জন", "জনা", "জনি",
    "জোন", "তোমালোক", "থকা", "দিছে", "দিয়ে", "দিয়া", "দিলে", "দুই", "দুয়ো", "দেখা",
    "দেখি", "নিজৰ", "নিজে", "নিজেই", "পৰা", "পাঁচ", "পাই", "পাছত", "পাৰ", "বুলি", "বোলা",
    "বোলে", "ভিতৰত", "যিসকল", "যোৱা", "লগত", "লোৱা", "শেষত", "সকলো", "সময়ত", "সাতে",
    "হওক", "হবই", "হবলৈ", "হলেও", "হাতত", "হিচাপে",
];
