//! Static UI strings per language. Lookup only; nothing here is computed.

use shared::domain::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub subtitle: &'static str,
    pub upload_idle: &'static str,
    pub upload_done: &'static str,
    pub btn_analyze: &'static str,
    pub btn_processing: &'static str,
    pub l_revenue: &'static str,
    pub l_profit: &'static str,
    pub l_score: &'static str,
    pub h_health: &'static str,
    pub l_expense: &'static str,
    pub l_margin: &'static str,
    pub l_wc: &'static str,
    pub h_market: &'static str,
    pub l_risk: &'static str,
    pub l_bench: &'static str,
    pub h_recs: &'static str,
    pub h_report: &'static str,
    pub btn_pdf: &'static str,
    pub footer: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Ta => &TA,
            Language::Hi => &HI,
            Language::Ml => &ML,
        }
    }

    /// Unknown codes get the English table.
    pub fn for_code(code: &str) -> &'static Labels {
        Self::for_language(Language::resolve(code))
    }

    /// Every slot with its key, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 19] {
        [
            ("subtitle", self.subtitle),
            ("upload_idle", self.upload_idle),
            ("upload_done", self.upload_done),
            ("btn_analyze", self.btn_analyze),
            ("btn_processing", self.btn_processing),
            ("l_revenue", self.l_revenue),
            ("l_profit", self.l_profit),
            ("l_score", self.l_score),
            ("h_health", self.h_health),
            ("l_expense", self.l_expense),
            ("l_margin", self.l_margin),
            ("l_wc", self.l_wc),
            ("h_market", self.h_market),
            ("l_risk", self.l_risk),
            ("l_bench", self.l_bench),
            ("h_recs", self.h_recs),
            ("h_report", self.h_report),
            ("btn_pdf", self.btn_pdf),
            ("footer", self.footer),
        ]
    }
}

pub static EN: Labels = Labels {
    subtitle: "Global Financial Intelligence Platform",
    upload_idle: "Upload CSV / Excel / PDF",
    upload_done: "Ready to Analyze",
    btn_analyze: "Run AI Analysis",
    btn_processing: "Processing Global Data...",
    l_revenue: "ANNUAL REVENUE",
    l_profit: "NET PROFIT",
    l_score: "CREDIT SCORE",
    h_health: "Financial Health",
    l_expense: "Expense Breakdown",
    l_margin: "Profit Margin",
    l_wc: "Working Capital",
    h_market: "Market Position",
    l_risk: "Risk Level",
    l_bench: "Industry Benchmark",
    h_recs: "✨ AI Strategic Recommendations",
    h_report: "Investor Executive Summary",
    btn_pdf: "Download Official PDF Report (English)",
    footer: "Secured by 256-bit Encryption",
};

pub static TA: Labels = Labels {
    subtitle: "உலகளாவிய நிதி நுண்ணறிவு தளம்",
    upload_idle: "CSV / Excel / PDF பதிவேற்றவும்",
    upload_done: "பகுப்பாய்வுக்குத் தயார்",
    btn_analyze: "AI பகுப்பாய்வை இயக்கவும்",
    btn_processing: "செயலாக்குகிறது...",
    l_revenue: "ஆண்டு வருவாய்",
    l_profit: "நிகர லாபம்",
    l_score: "கடன் மதிப்பீடு",
    h_health: "நிதி ஆரோக்கியம்",
    l_expense: "செலவு விவரம்",
    l_margin: "லாப விகிதம்",
    l_wc: "நடைமுறை மூலதனம்",
    h_market: "சந்தை நிலை",
    l_risk: "இடர் நிலை",
    l_bench: "தரக்குறியீடு",
    h_recs: "✨ AI மூலோபாய பரிந்துரைகள்",
    h_report: "முதலீட்டாளர் அறிக்கை",
    btn_pdf: "PDF அறிக்கையைப் பதிவிறக்கவும் (ஆங்கிலம்)",
    footer: "256-பிட் குறியாக்கத்தால் பாதுகாக்கப்பட்டது",
};

pub static HI: Labels = Labels {
    subtitle: "वैश्विक वित्तीय खुफिया मंच",
    upload_idle: "CSV / Excel / PDF अपलोड करें",
    upload_done: "विश्लेषण के लिए तैयार",
    btn_analyze: "AI विश्लेषण चलाएं",
    btn_processing: "प्रक्रिया चल रही है...",
    l_revenue: "वार्षिक राजस्व",
    l_profit: "शुद्ध लाभ",
    l_score: "क्रेडिट स्कोर",
    h_health: "वित्तीय स्वास्थ्य",
    l_expense: "व्यय विवरण",
    l_margin: "लाभ मार्जिन",
    l_wc: "कार्यशील पूंजी",
    h_market: "बाजार की स्थिति",
    l_risk: "जोखिम स्तर",
    l_bench: "उद्योग मानक",
    h_recs: "✨ AI रणनीतिक सुझाव",
    h_report: "निवेशक कार्यकारी सारांश",
    btn_pdf: "PDF रिपोर्ट डाउनलोड करें (अंग्रेज़ी)",
    footer: "256-बिट एन्क्रिप्शन द्वारा सुरक्षित",
};

pub static ML: Labels = Labels {
    subtitle: "ആഗോള സാമ്പത്തിക വിശകലന പ്ലാറ്റ്ഫോം",
    upload_idle: "CSV / Excel / PDF അപ്‌ലോഡ് ചെയ്യുക",
    upload_done: "വിശകലനത്തിന് തയ്യാറാണ്",
    btn_analyze: "AI വിശകലനം നടത്തുക",
    btn_processing: "പ്രോസസ്സ് ചെയ്യുന്നു...",
    l_revenue: "വാർഷിക വരുമാനം",
    l_profit: "അറ്റാദായം",
    l_score: "ക്രെഡിറ്റ് സ്കോർ",
    h_health: "സാമ്പത്തിക ആരോഗ്യം",
    l_expense: "ചെലവ് വിഭജനം",
    l_margin: "ലാഭ വിഹിതം",
    l_wc: "പ്രവർത്തന മൂലധനം",
    h_market: "വിപണി സ്ഥാനം",
    l_risk: "റിസ്ക് നില",
    l_bench: "വ്യവസായ നിലവാരം",
    h_recs: "✨ AI തന്ത്രപരമായ നിർദ്ദേശങ്ങൾ",
    h_report: "നിക്ഷേപക സംഗ്രഹം",
    btn_pdf: "PDF റിപ്പോർട്ട് ഡൗൺലോഡ് ചെയ്യുക (ഇംഗ്ലീഷ്)",
    footer: "256-ബിറ്റ് എൻക്രിപ്ഷൻ വഴി സുരക്ഷിതം",
};
