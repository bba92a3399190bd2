//! The built-in Tiger M.A.T.E campus rule table
//!
//! Reply texts are the canned campus-resource answers shipped with the
//! assistant. Paragraphs are separated by blank lines and key names use
//! the `**…**` emphasis convention for render-time highlighting.

use crate::routing::rule::{RuleEntry, RuleTable};
use crate::routing::topic::Topic;

impl RuleTable {
    /// The default campus table, in priority order
    ///
    /// The order is part of the assistant's contract: a prompt touching
    /// several topics resolves to the earliest-listed one.
    pub fn campus_default() -> Self {
        let entries = vec![
            RuleEntry::new(
                Topic::FinancialAid,
                ["financial aid", "fafsa", "scholarship"],
                FINANCIAL_AID_REPLY,
            ),
            RuleEntry::new(
                Topic::NewStudentOrientation,
                ["freshmen", "freshman", "new student", "first year"],
                ORIENTATION_REPLY,
            ),
            RuleEntry::new(
                Topic::AcademicPlanning,
                ["semester", "plan", "schedule", "classes", "course"],
                ACADEMIC_PLANNING_REPLY,
            ),
            RuleEntry::new(
                Topic::CampusEvents,
                ["event", "happening", "activities", "things to do"],
                CAMPUS_EVENTS_REPLY,
            ),
            RuleEntry::new(
                Topic::TutoringSupport,
                ["tutor", "study", "help with class", "academic support"],
                TUTORING_REPLY,
            ),
            RuleEntry::new(
                Topic::HealthAndCounseling,
                ["health", "sick", "doctor", "mental health", "counseling"],
                HEALTH_REPLY,
            ),
            RuleEntry::new(
                Topic::Housing,
                ["housing", "dorm", "roommate", "apartment"],
                HOUSING_REPLY,
            ),
            RuleEntry::new(
                Topic::CareerServices,
                ["career", "job", "internship", "resume"],
                CAREER_REPLY,
            ),
            RuleEntry::new(
                Topic::FoodAssistance,
                ["food", "hungry", "eat", "meal", "dining"],
                FOOD_REPLY,
            ),
            RuleEntry::new(
                Topic::Safety,
                ["safety", "police", "emergency", "security"],
                SAFETY_REPLY,
            ),
            RuleEntry::new(
                Topic::TechnologySupport,
                ["tech", "wifi", "password", "blackboard", "computer"],
                TECH_REPLY,
            ),
        ];

        // The campus table is statically known-good; a construction failure
        // here is a defect in this file, not a runtime condition.
        Self::new(entries, FALLBACK_REPLY).expect("built-in campus rule table must be valid")
    }
}

const FINANCIAL_AID_REPLY: &str = "Great question! The Office of Financial Aid is located in the Bell Building, 2nd Floor. They can help with FAFSA applications, scholarships, grants, and work-study programs. You can reach them at (713) 313-7071 or email financialaid@tsu.edu. Hours are Mon-Fri 8:00 AM - 5:00 PM.\n\nThere's also a FAFSA & Financial Aid Workshop coming up — check the Events page for the latest date and time. Make sure to bring your FSA ID and tax documents!";

const ORIENTATION_REPLY: &str = "Welcome to the TSU family! Here are the top resources for freshmen:\n\n1. **Academic Advising Center** — MLK Building, Suite 105. Get help with course selection and degree planning.\n2. **Tutoring Center** — Library Learning Center, 3rd Floor. Free peer tutoring in math, science, English, and more.\n3. **Counseling Center** — Sterling Student Life Center, Suite 230. Free, confidential mental health services.\n4. **New Tiger Orientation** — Check the Events page for the next orientation session.\n\nDon't hesitate to visit any of these offices — they're here specifically to help you succeed!";

const ACADEMIC_PLANNING_REPLY: &str = "Here's how to plan a solid first semester at TSU:\n\n1. **Meet with your advisor** at the Academic Advising Center (MLK Building, Suite 105) to map out your required courses.\n2. **Check your degree audit** on the myTSU portal to see what credits you still need.\n3. **Balance your load** — 15 credit hours is standard. Mix harder courses with lighter ones.\n4. **Use the To-Do Manager** right here in Tiger M.A.T.E to track your deadlines and assignments.\n5. **Register early** — priority registration dates are announced each semester. Check the Events page for info sessions.\n\nNeed help with a specific major or department? Just ask!";

const CAMPUS_EVENTS_REPLY: &str = "There's always something happening on campus! Check the **Events** page in your dashboard for the full list. Here are some highlights:\n\n- **Tiger Fest** — TSU's biggest back-to-school celebration with live music, free food, and giveaways.\n- **Fall Career Fair** — Over 75 employers recruiting TSU students for internships and jobs.\n- **Homecoming Week** — Step show, concert, and more.\n- **Midterm Study Jam** — Free tutoring and study spaces during midterm season.\n\nYou can filter events by category (academic, social, sports, career, health) to find what interests you most.";

const TUTORING_REPLY: &str = "TSU has excellent academic support! The **Tutoring & Academic Support Center** is on the 3rd Floor of the Library Learning Center. They offer:\n\n- Free peer tutoring in math, science, English, and more\n- Drop-in tutoring and scheduled appointments\n- Study groups for popular courses\n\nHours: Mon-Thu 9:00 AM - 7:00 PM, Fri 9:00 AM - 3:00 PM. Call (713) 313-1843 or email tutoring@tsu.edu.\n\nAlso check out the **Midterm Study Jam** events — free tutoring, snacks, and quiet study spaces during midterm week!";

const HEALTH_REPLY: &str = "TSU has you covered for both physical and mental health:\n\n**Student Health Center** — Health & Wellness Building, 3100 Cleburne St. Primary care, immunizations, and pharmacy services. Most services are free or low-cost. Call (713) 313-7173.\n\n**Counseling Center** — Sterling Student Life Center, Suite 230. Free, confidential mental health services including individual counseling, group therapy, and crisis intervention. No insurance needed. Call (713) 313-7804.\n\nBoth are open Mon-Fri 8:00 AM - 5:00 PM. For emergencies, call TSU Police at (713) 313-7000 (available 24/7).";

const HOUSING_REPLY: &str = "The **Office of Residential Life & Housing** handles everything housing-related. They're located at University Courtyard Apartments, Leasing Office. Contact them at (713) 313-4968 or housing@tsu.edu.\n\nThey can help with:\n- On-campus housing applications\n- Room assignments and roommate requests\n- Maintenance requests\n- Residence life programming\n\nHours: Mon-Fri 8:00 AM - 5:00 PM. Apply early — on-campus housing fills up fast!";

const CAREER_REPLY: &str = "The **Career Services Center** is your go-to for professional development! Located in MLK Building, Room 108. Contact: (713) 313-7225 or careers@tsu.edu.\n\nThey offer:\n- Resume reviews and building\n- Mock interviews\n- Internship and job postings\n- Career fairs (the Fall Career Fair has 75+ employers!)\n- LinkedIn profile optimization workshops\n\nCheck the Events page for upcoming career workshops and the Fall Career Fair date. Start building your career from day one — it's never too early!";

const FOOD_REPLY: &str = "No Tiger goes hungry! Here's what's available:\n\n**Tiger Food Pantry** — Sterling Student Life Center, Room 139. Free groceries and meal assistance. Confidential — just bring your TSU ID. Open Mon, Wed, Fri 10:00 AM - 2:00 PM. Call (713) 313-4968.\n\nThe campus also has various dining options in the Sterling Student Life Center and surrounding area. Your meal plan (if you have one) can be managed through the myTSU portal.";

const SAFETY_REPLY: &str = "**TSU Police Department** is available 24/7 for your safety. They're located at the Public Safety Building, 3200 Cleburne St.\n\n- **Emergency:** Call (713) 313-7000\n- **Email:** police@tsu.edu\n\nServices include:\n- Emergency response\n- Campus escorts (great for late-night walks)\n- Lost property\n- Incident reports\n\n**Save this number in your phone right now:** (713) 313-7000. It's the most important number for any TSU student to have.";

const TECH_REPLY: &str = "The **IT Help Desk** can solve your tech issues! Located on the 1st Floor of the Library Learning Center.\n\n- **Phone:** (713) 313-4357\n- **Email:** helpdesk@tsu.edu\n- **Hours:** Mon-Fri 8:00 AM - 6:00 PM, Sat 10:00 AM - 2:00 PM\n\nThey help with:\n- TSU email setup\n- Wi-Fi connectivity\n- myTSU portal issues\n- Blackboard access\n- Password resets\n- Campus computer labs\n\nFor password issues, try the self-service reset on the myTSU portal first — it's usually the fastest fix!";

const FALLBACK_REPLY: &str = "That's a great question! While I'm still learning about that specific topic, here are some resources that might help:\n\n- **Academic Advising** — MLK Building, Suite 105, (713) 313-7981\n- **Student Health Center** — (713) 313-7173\n- **Career Services** — MLK Building, Room 108, (713) 313-7225\n- **IT Help Desk** — (713) 313-4357\n\nYou can also browse the **Resources** page in your dashboard for a complete directory of campus offices and services. Is there something more specific I can help you with?";
