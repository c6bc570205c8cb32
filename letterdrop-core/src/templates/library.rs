//! Letter bodies used when the generation service is unavailable.
//!
//! Placeholders: `{date}`, `{name}`, `{address}`, `{situation}`.

use super::LetterTemplate;

pub(super) const CREDIT_DISPUTE: LetterTemplate = LetterTemplate {
    default_situation: "The account information listed is inaccurate and must be investigated.",
    body: "\
{date}

{name}
{address}

TransUnion Consumer Relations
2 Baldwin Place
Chester, PA 19022

RE: Dispute of Inaccurate Information

To Whom It May Concern:

I am writing pursuant to my rights under the Fair Credit Reporting Act (FCRA), 15 U.S.C. § 1681i, to dispute inaccurate information appearing on my credit report.

{situation}

Under Section 611 of the FCRA, you are required to conduct a reasonable investigation into this matter within 30 days of receipt of this letter.

Please investigate this dispute and remove or correct the inaccurate information. Send me written confirmation of the results of your investigation.

Sincerely,

{name}",
};

pub(super) const DEBT_VALIDATION: LetterTemplate = LetterTemplate {
    default_situation: "I dispute this debt and require validation.",
    body: "\
{date}

{name}
{address}

[Debt Collector Name]
[Collector Address]

RE: Debt Validation Request - FDCPA Section 809(b)

To Whom It May Concern:

I am writing pursuant to my rights under the Fair Debt Collection Practices Act (FDCPA), 15 U.S.C. § 1692g, to request validation of the alleged debt.

{situation}

Please provide:
• The original signed contract or agreement
• Complete payment history
• Proof of your authority to collect this debt
• Itemized statement of the amount claimed

Until you provide proper validation, you must cease all collection activities as required by Section 809(b) of the FDCPA.

Sincerely,

{name}",
};

pub(super) const CEASE_DESIST: LetterTemplate = LetterTemplate {
    default_situation: "Your continued contact is unwanted and must stop.",
    body: "\
{date}

{name}
{address}

[Debt Collector Name]
[Collector Address]

RE: Cease and Desist - FDCPA Section 805(c)

To Whom It May Concern:

Pursuant to my rights under the Fair Debt Collection Practices Act (FDCPA), 15 U.S.C. § 1692c(c), I hereby demand that you cease all communication with me.

{situation}

Any further contact after receipt of this letter, except to confirm receipt or notify me of legal action, will be considered a violation of federal law.

This notice is being sent via certified mail. I am retaining a copy for my records.

Sincerely,

{name}",
};

pub(super) const DEMAND_LETTER: LetterTemplate = LetterTemplate {
    default_situation: "Payment of amount owed.",
    body: "\
{date}

{name}
{address}

[Recipient Name]
[Recipient Address]

RE: Demand for Payment

Dear Sir/Madam:

This letter serves as formal demand for the following:

{situation}

You have 30 days from receipt of this letter to resolve this matter.

If I do not receive payment or a satisfactory response within 30 days, I will have no choice but to pursue all available legal remedies, including filing suit in small claims court.

Govern yourself accordingly.

Sincerely,

{name}",
};

pub(super) const MEDICAL_BILLING: LetterTemplate = LetterTemplate {
    default_situation: "The billed amount is inaccurate.",
    body: "\
{date}

{name}
{address}

[Hospital/Provider Name]
Billing Department
[Provider Address]

RE: Dispute of Medical Bill

To Whom It May Concern:

I am writing to dispute charges on my account.

{situation}

Please provide:
• Itemized statement of all charges
• Explanation of Benefits (EOB) from insurance
• Medical records related to these charges

Do not send this account to collections while this dispute is pending. I request a response within 30 days.

Sincerely,

{name}",
};
