//! English strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.schedule", "Schedule"),
    ("nav.clubs", "Clubs"),
    ("nav.profile", "Profile"),
    // Home Page
    ("home.greeting", "Hello,"),
    ("home.user.description", "Welcome to UniLink, your student platform"),
    ("home.schedule.title", "Today's Schedule"),
    ("home.schedule.view_all", "View all"),
    ("home.schedule.empty_title", "All clear!"),
    ("home.schedule.empty_text", "You have no classes scheduled for today."),
    ("home.news.title", "Latest News"),
    // Schedule Page
    ("schedule.page_title", "Your Schedule"),
    ("schedule.add_appointment", "Add"),
    ("schedule.day.monday", "Monday"),
    ("schedule.day.tuesday", "Tuesday"),
    ("schedule.day.wednesday", "Wednesday"),
    ("schedule.day.thursday", "Thursday"),
    ("schedule.day.friday", "Friday"),
    ("schedule.day.saturday", "Saturday"),
    ("schedule.day.sunday", "Sunday"),
    ("schedule.day.monday_abbr", "Mon"),
    ("schedule.day.tuesday_abbr", "Tue"),
    ("schedule.day.wednesday_abbr", "Wed"),
    ("schedule.day.thursday_abbr", "Thu"),
    ("schedule.day.friday_abbr", "Fri"),
    ("schedule.day.saturday_abbr", "Sat"),
    ("schedule.day.sunday_abbr", "Sun"),
    ("schedule.type.lecture", "Lecture"),
    ("schedule.type.seminar", "Seminar"),
    ("schedule.type.lab", "Lab"),
    ("schedule.empty_text", "No classes scheduled for"),
    ("schedule.edit", "Edit"),
    ("schedule.delete", "Delete"),
    // Appointment Dialog
    ("dialog.appointment.add_title", "Add New Appointment"),
    ("dialog.appointment.add_description", "Fill in the details to add a new class."),
    ("dialog.appointment.edit_title", "Edit Appointment"),
    ("dialog.appointment.edit_description", "Update the details of your class."),
    ("dialog.appointment.course_label", "Course"),
    ("dialog.appointment.course_placeholder", "e.g. Introduction to AI"),
    ("dialog.appointment.professor_label", "Professor"),
    ("dialog.appointment.professor_placeholder", "e.g. Dr. Alan Turing"),
    ("dialog.appointment.room_label", "Room / Location"),
    ("dialog.appointment.room_placeholder", "e.g. Room 305"),
    ("dialog.appointment.start_time_label", "Start Time"),
    ("dialog.appointment.end_time_label", "End Time"),
    ("dialog.appointment.day_label", "Day"),
    ("dialog.appointment.day_placeholder", "Select a day"),
    ("dialog.appointment.type_label", "Type"),
    ("dialog.appointment.type_placeholder", "Select a type"),
    ("dialog.appointment.add_button", "Add Appointment"),
    ("dialog.appointment.save_button", "Save Changes"),
    // Delete Dialog
    ("dialog.delete.title", "Are you sure?"),
    ("dialog.delete.description", "This action cannot be undone. The appointment will be permanently removed from your schedule."),
    ("dialog.delete.cancel", "Cancel"),
    ("dialog.delete.confirm", "Delete"),
    // Clubs Page
    ("clubs.page_title", "Clubs"),
    ("clubs.page_description", "Discover and join student clubs."),
    ("clubs.add_club", "Add Club"),
    ("clubs.no_clubs_title", "No clubs found"),
    ("clubs.no_clubs_description", "Add a new club to get started."),
    ("dialog.club.add_title", "Add New Club"),
    ("dialog.club.add_description", "Fill in the details below to add a new club."),
    ("dialog.club.name_label", "Club Name"),
    ("dialog.club.name_placeholder", "Debate Club"),
    ("dialog.club.description_label", "Description"),
    ("dialog.club.description_placeholder", "A club for..."),
    ("dialog.club.save_button", "Save Club"),
    // Clients Page
    ("clients.page_title", "Clients"),
    ("clients.page_description", "Manage client profiles and information."),
    ("clients.add_client", "Add Client"),
    ("clients.no_clients_title", "No clients found"),
    ("clients.no_clients_description", "Add a new client to get started."),
    ("dialog.client.add_title", "Add New Client"),
    ("dialog.client.add_description", "Fill in the details below to add a new client."),
    ("dialog.client.name_label", "Name"),
    ("dialog.client.name_placeholder", "John Doe"),
    ("dialog.client.email_label", "Email"),
    ("dialog.client.email_placeholder", "john.doe@example.com"),
    ("dialog.client.university_label", "University"),
    ("dialog.client.university_placeholder", "State University"),
    ("dialog.client.save_button", "Save Client"),
    // Profile Page
    ("profile.page_title", "My Profile"),
    ("profile.page_description", "Your personal and academic information."),
    ("profile.edit_button", "Edit Profile"),
    ("profile.email_label", "Email Address"),
    ("profile.university_label", "University"),
    ("profile.faculty_label", "Faculty"),
    ("profile.course_label", "Course"),
    ("profile.group_label", "Group"),
    ("profile.edit_title", "Edit Profile"),
    ("profile.edit_description", "Update your personal and academic details."),
    ("profile.name_label", "Full Name"),
    ("profile.description_label", "Description"),
    ("profile.cancel_button", "Cancel"),
    ("profile.save_button", "Save Changes"),
    ("profile.update_toast_title", "Profile updated"),
    ("profile.update_toast_description", "Your information has been saved successfully."),
    // Validation messages
    ("zod.course.min", "Course name must be at least 2 characters."),
    ("zod.professor.min", "Professor name must be at least 2 characters."),
    ("zod.room.min", "Room is required."),
    ("zod.time.invalid", "Invalid time format (HH:MM)."),
    ("zod.club.name.min", "Club name must be at least 2 characters."),
    ("zod.club.description.min", "Description is too short."),
    ("zod.client.name.min", "Name must be at least 2 characters."),
    ("zod.client.email.invalid", "Invalid email address."),
    ("zod.client.university.min", "University is required."),
    ("zod.profile.name.min", "Name is too short."),
    ("zod.profile.description.min", "Description is too short."),
    ("zod.profile.email.invalid", "Invalid email address."),
    ("zod.profile.university.min", "University name is too short."),
    ("zod.profile.faculty.min", "Faculty name is too short."),
    ("zod.profile.course.min", "Course must be at least 1."),
    ("zod.profile.course.max", "Course must be at most 7."),
    ("zod.profile.group.min", "Group name is too short."),
    ("zod.day.invalid", "Select a day of the week."),
    ("zod.type.invalid", "Select a class type."),
    ("zod.club.avatar_url.invalid", "Invalid image URL."),
];
