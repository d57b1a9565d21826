//! Literal document text for each script
//!
//! Both renderers read every fixed piece of text from [`Strings`], so the
//! simplified and traditional documents share one substitution path.

use cjk_text::Script;

/// One bullet of the risk disclosure box
///
/// Rendered as `title: before<emphasis>after`, with `title` in bold and
/// `emphasis` bold and underlined.
#[derive(Debug, Clone, Copy)]
pub struct RiskAlert {
    pub title: &'static str,
    pub before: &'static str,
    pub emphasis: &'static str,
    pub after: &'static str,
}

/// Every literal text slot of the proposal documents
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub brand: &'static str,
    pub brand_tagline: &'static str,
    pub author: &'static str,

    pub overview_heading: &'static str,
    pub salutation_prefix: &'static str,
    pub salutation_suffix: &'static str,
    /// Overview paragraph up to the opening quote around the plan name
    pub intro_lead: &'static str,
    /// Overview paragraph from the closing quote after the plan name
    pub intro_tail: &'static str,
    pub premium_total_label: &'static str,
    pub payment_type_label: &'static str,
    /// Heading of the premium list in the typeset document
    pub premium_info_label: &'static str,
    pub currency: &'static str,
    pub hedge_label: &'static str,
    pub hedge_value: &'static str,
    pub domicile_label: &'static str,
    pub domicile_value: &'static str,

    pub risk_heading: &'static str,
    pub risk_alerts: [RiskAlert; 3],

    /// Two lines of the infographic's centre node
    pub infographic_core: [&'static str; 2],
    /// Top, lower-left and lower-right nodes, two lines each
    pub infographic_nodes: [[&'static str; 2]; 3],

    pub page_break_preview: &'static str,
    pub running_header_prefix: &'static str,
    pub running_header_label: &'static str,

    pub policy_year_column: &'static str,
    pub return_column: &'static str,
    pub year_prefix: &'static str,
    pub year_suffix: &'static str,

    pub scenario_a_heading: &'static str,
    pub scenario_a_description: &'static str,
    pub surrender_column: &'static str,
    pub death_column: &'static str,
    pub scenario_a_caption: &'static str,

    pub scenario_b_heading: &'static str,
    /// Scenario B paragraph up to the annual withdrawal amount
    pub scenario_b_lead: &'static str,
    /// Scenario B paragraph after the annual withdrawal amount
    pub scenario_b_tail: &'static str,
    pub cumulative_column: &'static str,
    pub remaining_column: &'static str,
    pub scenario_b_caption: &'static str,

    pub promotions_heading: &'static str,
    pub rebate_title: &'static str,
    pub prepay_title: &'static str,
    pub lump_sum_name: &'static str,
    pub five_year_name: &'static str,
    pub valid_until: &'static str,

    pub disclaimer_title: &'static str,
    pub disclaimer_body: &'static str,
}

impl Strings {
    /// Policy year label (e.g., "第 10 年")
    pub fn policy_year(&self, year: u32) -> String {
        format!("{}{}{}", self.year_prefix, year, self.year_suffix)
    }
}

/// Look up the document text for a script
pub fn strings(script: Script) -> &'static Strings {
    match script {
        Script::Simplified => &SIMPLIFIED,
        Script::Traditional => &TRADITIONAL,
    }
}

static SIMPLIFIED: Strings = Strings {
    title: "离岸资产配置建议书",
    subtitle: "Offshore Asset Allocation",
    brand: "PB",
    brand_tagline: "Risk & Compliance",
    author: "Private Banking Division",

    overview_heading: "合规概览",
    salutation_prefix: "尊贵的 ",
    salutation_suffix: " 阁下",
    intro_lead: "，鉴于内地“金税四期”大数据监管的全面启动，以及 CRS（共同汇报标准）对海外资产的穿透式交换，传统的资产持有方式已面临挑战。本建议书旨在利用“",
    intro_tail: "”搭建合规的资产隔离架构，协助您应对潜在的税务追征风险，并实现资产的合法跨境传承。",
    premium_total_label: "总保费",
    payment_type_label: "缴费方式",
    premium_info_label: "保费信息",
    currency: "USD",
    hedge_label: "风险对冲",
    hedge_value: "已配置",
    domicile_label: "资产属地",
    domicile_value: "中国香港 (离岸)",

    risk_heading: "当前关键风险提示 (Key Risk Alerts)",
    risk_alerts: [
        RiskAlert {
            title: "金税四期 & CRS",
            before: "账户信息自动比对，隐匿资产面临定性风险及 0.5-5 倍罚款。",
            emphasis: "",
            after: "",
        },
        RiskAlert {
            title: "滞纳金风险",
            before: "长期未缴税款将产生",
            emphasis: "每年 18%",
            after: " 的滞纳金，侵蚀资产本金。",
        },
        RiskAlert {
            title: "身份规划",
            before: "建议尽早配置香港身份 (优才/高才/投资移民)，转换税务居民身份以优化税务空间。",
            emphasis: "",
            after: "",
        },
    ],

    infographic_core: ["税务", "合规"],
    infographic_nodes: [["资产", "隔离"], ["身份", "规划"], ["流动", "储备"]],

    page_break_preview: "Page Break Preview",
    running_header_prefix: "Proposal for:",
    running_header_label: "Financial Projection (Page 2)",

    policy_year_column: "保单年度",
    return_column: "总回报率 (%)",
    year_prefix: "第 ",
    year_suffix: " 年",

    scenario_a_heading: "情境 A: 资产隔离与增值 (Asset Isolation)",
    scenario_a_description: "利用保险架构的法律属性，实现资产与个人债务风险的有效隔离。身故赔偿金在一般情况下不纳入内地遗产税（如有）征收范围。",
    surrender_column: "退保价值 (流动性)",
    death_column: "身故赔偿 (资产传承)",
    scenario_a_caption: "资产隔离效益",

    scenario_b_heading: "情境 B: 税务流动性准备 (Tax Liquidity Reserve)",
    scenario_b_lead: "针对潜在的税务补缴需求或突发资金周转，本计划提供每年 ",
    scenario_b_tail: " 的稳定现金流，避免因资金冻结而产生的滞纳金风险。",
    cumulative_column: "累计流动性提取",
    remaining_column: "剩余储备价值",
    scenario_b_caption: "流动性储备展示",

    promotions_heading: "限时推广",
    rebate_title: "保费回赠",
    prepay_title: "预缴利率 (锁定美息)",
    lump_sum_name: "一笔过",
    five_year_name: "5年缴",
    valid_until: "至",

    disclaimer_title: "合规免责声明",
    disclaimer_body: "本文件仅供参考，不构成税务法律意见。税务后果取决于客户具体情况及当时法律，建议咨询专业税务顾问。关于香港身份规划、CRS申报及金税四期应对策略，请参阅银行提供的详细合规指引。投资涉及风险，过往表现不代表将来结果。",
};

static TRADITIONAL: Strings = Strings {
    title: "離岸資產配置建議書",
    subtitle: "Offshore Asset Allocation",
    brand: "PB",
    brand_tagline: "Risk & Compliance",
    author: "Private Banking Division",

    overview_heading: "合規概覽",
    salutation_prefix: "尊貴的 ",
    salutation_suffix: " 閣下",
    intro_lead: "，鑑於內地「金稅四期」大數據監管的全面啟動，以及 CRS（共同匯報標準）對海外資產的穿透式交換，傳統的資產持有方式已面臨挑戰。本建議書旨在利用「",
    intro_tail: "」搭建合規的資產隔離架構，協助您應對潛在的稅務追徵風險，並實現資產的合法跨境傳承。",
    premium_total_label: "總保費",
    payment_type_label: "繳費方式",
    premium_info_label: "保費資訊",
    currency: "USD",
    hedge_label: "風險對沖",
    hedge_value: "已配置",
    domicile_label: "資產屬地",
    domicile_value: "中國香港 (離岸)",

    risk_heading: "當前關鍵風險提示 (Key Risk Alerts)",
    risk_alerts: [
        RiskAlert {
            title: "金稅四期 & CRS",
            before: "賬戶資訊自動比對，隱匿資產面臨定性風險及 0.5-5 倍罰款。",
            emphasis: "",
            after: "",
        },
        RiskAlert {
            title: "滯納金風險",
            before: "長期未繳稅款將產生",
            emphasis: "每年 18%",
            after: " 的滯納金，侵蝕資產本金。",
        },
        RiskAlert {
            title: "身份規劃",
            before: "建議盡早配置香港身份 (優才/高才/投資移民)，轉換稅務居民身份以優化稅務空間。",
            emphasis: "",
            after: "",
        },
    ],

    infographic_core: ["稅務", "合規"],
    infographic_nodes: [["資產", "隔離"], ["身份", "規劃"], ["流動", "儲備"]],

    page_break_preview: "Page Break Preview",
    running_header_prefix: "Proposal for:",
    running_header_label: "Financial Projection (Page 2)",

    policy_year_column: "保單年度",
    return_column: "總回報率 (%)",
    year_prefix: "第 ",
    year_suffix: " 年",

    scenario_a_heading: "情境 A: 資產隔離與增值 (Asset Isolation)",
    scenario_a_description: "利用保險架構的法律屬性，實現資產與個人債務風險的有效隔離。身故賠償金在一般情況下不納入內地遺產稅（如有）徵收範圍。",
    surrender_column: "退保價值 (流動性)",
    death_column: "身故賠償 (資產傳承)",
    scenario_a_caption: "資產隔離效益",

    scenario_b_heading: "情境 B: 稅務流動性準備 (Tax Liquidity Reserve)",
    scenario_b_lead: "針對潛在的稅務補繳需求或突發資金周轉，本計劃提供每年 ",
    scenario_b_tail: " 的穩定現金流，避免因資金凍結而產生的滯納金風險。",
    cumulative_column: "累計流動性提取",
    remaining_column: "剩餘儲備價值",
    scenario_b_caption: "流動性儲備展示",

    promotions_heading: "限時推廣",
    rebate_title: "保費回贈",
    prepay_title: "預繳利率 (鎖定美息)",
    lump_sum_name: "一筆過",
    five_year_name: "5年繳",
    valid_until: "至",

    disclaimer_title: "合規免責聲明",
    disclaimer_body: "本文件僅供參考，不構成稅務法律意見。稅務後果取決於客戶具體情況及當時法律，建議諮詢專業稅務顧問。關於香港身份規劃、CRS申報及金稅四期應對策略，請參閱銀行提供的詳細合規指引。投資涉及風險，過往表現不代表將來結果。",
};
